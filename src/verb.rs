//! Verb nodes and their attribute sets
//!
//! Each verb renders under its fixed TwiML element name with only its
//! non-zero attributes present, in declared field order.

use crate::xml::Element;

/// One call-control instruction inside a [`Response`](crate::Response).
#[derive(Clone, Debug, PartialEq)]
pub enum Verb {
    Say(Say),
    Dial(crate::dial::Dial),
    Record(Record),
    Hangup,
    Reject(Reject),
    Pause(Pause),
    Play(Play),
    Gather(Gather),
    Redirect(Redirect),
    Enqueue(Enqueue),
}

impl Verb {
    pub(crate) fn to_element(&self) -> Element {
        match self {
            Self::Say(say) => say.to_element(),
            Self::Dial(dial) => dial.to_element(),
            Self::Record(record) => record.to_element(),
            Self::Hangup => Element::new("Hangup"),
            Self::Reject(reject) => reject.to_element(),
            Self::Pause(pause) => pause.to_element(),
            Self::Play(play) => play.to_element(),
            Self::Gather(gather) => gather.to_element(),
            Self::Redirect(redirect) => redirect.to_element(),
            Self::Enqueue(enqueue) => enqueue.to_element(),
        }
    }
}

/// Attributes for the `<Say>` verb.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SayAttr {
    pub voice: String,
    /// Renders as the `loop` attribute.
    pub loop_count: u32,
    pub language: String,
}

/// The `<Say>` verb: speak text to the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Say {
    pub value: String,
    pub attr: SayAttr,
}

impl Say {
    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::with_text("Say", &self.value);
        element.attr("voice", &self.attr.voice);
        element.attr_u32("loop", self.attr.loop_count);
        element.attr("language", &self.attr.language);
        element
    }
}

/// Attributes for the `<Record>` verb.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RecordAttr {
    pub action: String,
    pub method: String,
    pub timeout: u32,
    pub finish_on_key: String,
    pub max_length: u32,
    pub play_beep: bool,
    pub trim: String,
    pub recording_status_callback: String,
    pub recording_status_callback_method: String,
    pub transcribe: bool,
    pub transcribe_callback: String,
}

/// The `<Record>` verb: record the caller's voice. Nothing nests within
/// `<Record>` and `<Record>` nests within nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    pub attr: RecordAttr,
}

impl Record {
    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::new("Record");
        element.attr("action", &self.attr.action);
        element.attr("method", &self.attr.method);
        element.attr_u32("timeout", self.attr.timeout);
        element.attr("finishOnKey", &self.attr.finish_on_key);
        element.attr_u32("maxLength", self.attr.max_length);
        element.attr_bool("playBeep", self.attr.play_beep);
        element.attr("trim", &self.attr.trim);
        element.attr(
            "recordingStatusCallback",
            &self.attr.recording_status_callback,
        );
        element.attr(
            "recordingStatusCallbackMethod",
            &self.attr.recording_status_callback_method,
        );
        element.attr_bool("transcribe", self.attr.transcribe);
        element.attr("transcribeCallback", &self.attr.transcribe_callback);
        element
    }
}

/// The `<Reject>` verb: reject the incoming call without answering.
///
/// Carries no attributes in this model; the optional text content may be
/// set through the handle returned by [`Response::reject`](crate::Response::reject).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reject {
    pub value: String,
}

impl Reject {
    pub(crate) fn to_element(&self) -> Element {
        Element::with_text("Reject", &self.value)
    }
}

/// Attributes for the `<Pause>` verb.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PauseAttr {
    pub length: u32,
}

/// The `<Pause>` verb: wait silently for a number of seconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pause {
    pub attr: PauseAttr,
}

impl Pause {
    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::new("Pause");
        element.attr_u32("length", self.attr.length);
        element
    }
}

/// Attributes for the `<Play>` verb.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PlayAttr {
    /// Renders as the `loop` attribute.
    pub loop_count: u32,
    pub digits: String,
}

/// The `<Play>` verb: play an audio file at the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Play {
    pub value: String,
    pub attr: PlayAttr,
}

impl Play {
    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::with_text("Play", &self.value);
        element.attr_u32("loop", self.attr.loop_count);
        element.attr("digits", &self.attr.digits);
        element
    }
}

/// Attributes for the `<Redirect>` verb.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RedirectAttr {
    pub method: String,
}

/// The `<Redirect>` verb: transfer control to another TwiML document URL.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Redirect {
    pub value: String,
    pub attr: RedirectAttr,
}

impl Redirect {
    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::with_text("Redirect", &self.value);
        element.attr("method", &self.attr.method);
        element
    }
}

/// Attributes for the `<Enqueue>` verb.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EnqueueAttr {
    pub action: String,
    pub method: String,
    pub timeout: u32,
    pub finish_on_key: String,
    pub num_digits: u32,
}

/// The `<Enqueue>` verb: place the caller in a named queue.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Enqueue {
    pub value: String,
    pub attr: EnqueueAttr,
}

impl Enqueue {
    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::with_text("Enqueue", &self.value);
        element.attr("action", &self.attr.action);
        element.attr("method", &self.attr.method);
        element.attr_u32("timeout", self.attr.timeout);
        element.attr("finishOnKey", &self.attr.finish_on_key);
        element.attr_u32("numDigits", self.attr.num_digits);
        element
    }
}

/// Attributes for the `<Gather>` verb.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GatherAttr {
    pub action: String,
    pub method: String,
    pub timeout: u32,
    pub finish_on_key: String,
    pub num_digits: u32,
}

/// A nested prompt inside `<Gather>`; only these three verbs may nest there.
#[derive(Clone, Debug, PartialEq)]
pub enum GatherChild {
    Say(Say),
    Play(Play),
    Pause(Pause),
}

impl GatherChild {
    fn to_element(&self) -> Element {
        match self {
            Self::Say(say) => say.to_element(),
            Self::Play(play) => play.to_element(),
            Self::Pause(pause) => pause.to_element(),
        }
    }
}

/// The `<Gather>` verb: collect digits, optionally playing prompts while
/// the caller types.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gather {
    pub attr: GatherAttr,
    pub children: Vec<GatherChild>,
}

impl Gather {
    pub(crate) fn new(attr: GatherAttr) -> Self {
        Self {
            attr,
            children: Vec::new(),
        }
    }

    /// Append a `<Say>` prompt to this gather.
    pub fn say(&mut self, value: impl Into<String>, attr: SayAttr) {
        self.children.push(GatherChild::Say(Say {
            value: value.into(),
            attr,
        }));
    }

    /// Append a `<Play>` prompt to this gather.
    pub fn play(&mut self, value: impl Into<String>, attr: PlayAttr) {
        self.children.push(GatherChild::Play(Play {
            value: value.into(),
            attr,
        }));
    }

    /// Append a `<Pause>` to this gather.
    pub fn pause(&mut self, attr: PauseAttr) {
        self.children.push(GatherChild::Pause(Pause { attr }));
    }

    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::new("Gather");
        element.attr("action", &self.attr.action);
        element.attr("method", &self.attr.method);
        element.attr_u32("timeout", self.attr.timeout);
        element.attr("finishOnKey", &self.attr.finish_on_key);
        element.attr_u32("numDigits", self.attr.num_digits);
        for child in &self.children {
            element.child(child.to_element());
        }
        element
    }
}
