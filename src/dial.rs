//! The Dial container and its noun children

use crate::xml::Element;

/// Attributes for the `<Dial>` verb.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DialAttr {
    pub action: String,
    pub method: String,
    pub timeout: u32,
    pub hangup_on_star: bool,
    pub time_limit: u32,
    /// Renders as the `callerId` attribute.
    pub caller_id: String,
    pub record: String,
    pub trim: String,
    pub recording_status_callback: String,
    pub recording_status_callback_method: String,
    pub recording_status_callback_event: String,
    pub answer_on_bridge: bool,
    pub ring_tone: String,
}

/// A dial destination. Nouns are only valid inside a `<Dial>` container,
/// which the type system enforces: nothing else holds a [`Noun`].
#[derive(Clone, Debug, PartialEq)]
pub enum Noun {
    Number(Number),
    Conference(Conference),
    Client(Client),
    Sip(Sip),
}

impl Noun {
    fn to_element(&self) -> Element {
        match self {
            Self::Number(number) => number.to_element(),
            Self::Conference(conference) => conference.to_element(),
            Self::Client(client) => client.to_element(),
            Self::Sip(sip) => sip.to_element(),
        }
    }
}

/// The `<Dial>` verb: connect the caller to another party.
///
/// The simple form carries the target as bare text content; the structured
/// form holds one or more nouns appended through the handle returned by
/// [`Response::dial`](crate::Response::dial).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dial {
    pub value: String,
    pub attr: DialAttr,
    pub nouns: Vec<Noun>,
}

impl Dial {
    pub(crate) fn new(attr: DialAttr) -> Self {
        Self {
            value: String::new(),
            attr,
            nouns: Vec::new(),
        }
    }

    pub(crate) fn with_target(value: impl Into<String>, attr: DialAttr) -> Self {
        Self {
            value: value.into(),
            attr,
            nouns: Vec::new(),
        }
    }

    /// Append a `<Number>` noun to this dial.
    pub fn number(&mut self, value: impl Into<String>, attr: NumberAttr) {
        self.nouns.push(Noun::Number(Number {
            value: value.into(),
            attr,
        }));
    }

    /// Append a `<Conference>` noun to this dial.
    pub fn conference(&mut self, value: impl Into<String>, attr: ConferenceAttr) {
        self.nouns.push(Noun::Conference(Conference {
            value: value.into(),
            attr,
        }));
    }

    /// Append a `<Client>` noun to this dial.
    pub fn client(&mut self, value: impl Into<String>, attr: ClientAttr) {
        self.nouns.push(Noun::Client(Client {
            value: value.into(),
            attr,
        }));
    }

    /// Append a `<Sip>` noun to this dial.
    pub fn sip(&mut self, value: impl Into<String>, attr: SipAttr) {
        self.nouns.push(Noun::Sip(Sip {
            value: value.into(),
            attr,
        }));
    }

    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::with_text("Dial", &self.value);
        element.attr("action", &self.attr.action);
        element.attr("method", &self.attr.method);
        element.attr_u32("timeout", self.attr.timeout);
        element.attr_bool("hangupOnStar", self.attr.hangup_on_star);
        element.attr_u32("timeLimit", self.attr.time_limit);
        element.attr("callerId", &self.attr.caller_id);
        element.attr("record", &self.attr.record);
        element.attr("trim", &self.attr.trim);
        element.attr(
            "recordingStatusCallback",
            &self.attr.recording_status_callback,
        );
        element.attr(
            "recordingStatusCallbackMethod",
            &self.attr.recording_status_callback_method,
        );
        element.attr(
            "recordingStatusCallbackEvent",
            &self.attr.recording_status_callback_event,
        );
        element.attr_bool("answerOnBridge", self.attr.answer_on_bridge);
        element.attr("ringTone", &self.attr.ring_tone);
        for noun in &self.nouns {
            element.child(noun.to_element());
        }
        element
    }
}

/// Attributes for the `<Number>` noun.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct NumberAttr {
    pub send_digits: String,
    pub url: String,
    pub method: String,
    pub status_callback_event: String,
    pub status_callback: String,
    pub status_callback_method: String,
}

/// The `<Number>` noun: a phone number to dial.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Number {
    pub value: String,
    pub attr: NumberAttr,
}

impl Number {
    fn to_element(&self) -> Element {
        let mut element = Element::with_text("Number", &self.value);
        element.attr("sendDigits", &self.attr.send_digits);
        element.attr("url", &self.attr.url);
        element.attr("method", &self.attr.method);
        element.attr("statusCallbackEvent", &self.attr.status_callback_event);
        element.attr("statusCallback", &self.attr.status_callback);
        element.attr("statusCallbackMethod", &self.attr.status_callback_method);
        element
    }
}

/// Attributes for the `<Client>` noun.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ClientAttr {
    pub url: String,
    pub method: String,
    pub status_callback_event: String,
    pub status_callback: String,
    pub status_callback_method: String,
}

/// The `<Client>` noun: a registered softphone client to dial.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Client {
    pub value: String,
    pub attr: ClientAttr,
}

impl Client {
    fn to_element(&self) -> Element {
        let mut element = Element::with_text("Client", &self.value);
        element.attr("url", &self.attr.url);
        element.attr("method", &self.attr.method);
        element.attr("statusCallbackEvent", &self.attr.status_callback_event);
        element.attr("statusCallback", &self.attr.status_callback);
        element.attr("statusCallbackMethod", &self.attr.status_callback_method);
        element
    }
}

/// Attributes for the `<Sip>` noun.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SipAttr {
    pub username: String,
    pub password: String,
    pub url: String,
    pub method: String,
    pub status_callback_event: String,
    pub status_callback: String,
    pub status_callback_method: String,
}

/// The `<Sip>` noun: a SIP address to dial.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sip {
    pub value: String,
    pub attr: SipAttr,
}

impl Sip {
    fn to_element(&self) -> Element {
        let mut element = Element::with_text("Sip", &self.value);
        element.attr("username", &self.attr.username);
        element.attr("password", &self.attr.password);
        element.attr("url", &self.attr.url);
        element.attr("method", &self.attr.method);
        element.attr("statusCallbackEvent", &self.attr.status_callback_event);
        element.attr("statusCallback", &self.attr.status_callback);
        element.attr("statusCallbackMethod", &self.attr.status_callback_method);
        element
    }
}

/// Attributes for the `<Conference>` noun.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ConferenceAttr {
    pub muted: bool,
    pub beep: String,
    pub start_conference_on_enter: bool,
    pub end_conference_on_exit: bool,
    /// Renders as the `waitUrl` attribute.
    pub wait_url: String,
    pub wait_method: String,
    pub max_participants: u8,
    pub record: String,
    pub region: String,
    pub trim: String,
    pub status_callback_event: String,
    pub status_callback: String,
    pub status_callback_method: String,
    pub recording_status_callback_event: String,
    pub recording_status_callback: String,
    pub recording_status_callback_method: String,
    /// Renders as the `eventCallbackUrl` attribute.
    pub event_callback_url: String,
}

/// The `<Conference>` noun: a named conference room to join.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conference {
    pub value: String,
    pub attr: ConferenceAttr,
}

impl Conference {
    fn to_element(&self) -> Element {
        let mut element = Element::with_text("Conference", &self.value);
        element.attr_bool("muted", self.attr.muted);
        element.attr("beep", &self.attr.beep);
        element.attr_bool(
            "startConferenceOnEnter",
            self.attr.start_conference_on_enter,
        );
        element.attr_bool("endConferenceOnExit", self.attr.end_conference_on_exit);
        element.attr("waitUrl", &self.attr.wait_url);
        element.attr("waitMethod", &self.attr.wait_method);
        element.attr_u32("maxParticipants", u32::from(self.attr.max_participants));
        element.attr("record", &self.attr.record);
        element.attr("region", &self.attr.region);
        element.attr("trim", &self.attr.trim);
        element.attr("statusCallbackEvent", &self.attr.status_callback_event);
        element.attr("statusCallback", &self.attr.status_callback);
        element.attr("statusCallbackMethod", &self.attr.status_callback_method);
        element.attr(
            "recordingStatusCallbackEvent",
            &self.attr.recording_status_callback_event,
        );
        element.attr(
            "recordingStatusCallback",
            &self.attr.recording_status_callback,
        );
        element.attr(
            "recordingStatusCallbackMethod",
            &self.attr.recording_status_callback_method,
        );
        element.attr("eventCallbackUrl", &self.attr.event_callback_url);
        element
    }
}
