//! Response root builder

use std::io;

use crate::dial::{Dial, DialAttr};
use crate::error::Result;
use crate::verb::{
    Enqueue, EnqueueAttr, Gather, GatherAttr, Pause, PauseAttr, Play, PlayAttr, Record,
    RecordAttr, Redirect, RedirectAttr, Reject, Say, SayAttr, Verb,
};
use crate::xml::{self, Document, Element};

/// A complete TwiML response under construction.
///
/// The response owns every node in the tree; container appends hand back a
/// `&mut` handle into the tree for nested appends. Verbs render in the order
/// they were appended, which is the order the platform executes them.
/// Rendering never mutates the tree, so a response may be rendered any
/// number of times.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Response {
    verbs: Vec<Verb>,
}

impl Response {
    /// Create an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, verb: Verb) {
        self.verbs.push(verb);
    }

    /// Append a `<Say>` verb.
    pub fn say(&mut self, value: impl Into<String>, attr: SayAttr) {
        self.add(Verb::Say(Say {
            value: value.into(),
            attr,
        }));
    }

    /// Append a `<Dial>` verb carrying its target as bare text content.
    pub fn dial_simple(&mut self, value: impl Into<String>, attr: DialAttr) {
        self.add(Verb::Dial(Dial::with_target(value, attr)));
    }

    /// Append an empty `<Dial>` container and return a handle for appending
    /// nouns to it.
    pub fn dial(&mut self, attr: DialAttr) -> &mut Dial {
        self.add(Verb::Dial(Dial::new(attr)));
        match self.verbs.last_mut() {
            Some(Verb::Dial(dial)) => dial,
            _ => unreachable!("verb appended above is a Dial"),
        }
    }

    /// Append a `<Record>` verb.
    pub fn record(&mut self, attr: RecordAttr) {
        self.add(Verb::Record(Record { attr }));
    }

    /// Append a `<Hangup>` verb.
    pub fn hangup(&mut self) {
        self.add(Verb::Hangup);
    }

    /// Append a `<Reject>` verb and return a handle to it.
    pub fn reject(&mut self) -> &mut Reject {
        self.add(Verb::Reject(Reject::default()));
        match self.verbs.last_mut() {
            Some(Verb::Reject(reject)) => reject,
            _ => unreachable!("verb appended above is a Reject"),
        }
    }

    /// Append a `<Pause>` verb.
    pub fn pause(&mut self, attr: PauseAttr) {
        self.add(Verb::Pause(Pause { attr }));
    }

    /// Append a `<Play>` verb.
    pub fn play(&mut self, value: impl Into<String>, attr: PlayAttr) {
        self.add(Verb::Play(Play {
            value: value.into(),
            attr,
        }));
    }

    /// Append an empty `<Gather>` container and return a handle for
    /// appending Say, Play, or Pause prompts to it.
    pub fn gather(&mut self, attr: GatherAttr) -> &mut Gather {
        self.add(Verb::Gather(Gather::new(attr)));
        match self.verbs.last_mut() {
            Some(Verb::Gather(gather)) => gather,
            _ => unreachable!("verb appended above is a Gather"),
        }
    }

    /// Append a `<Redirect>` verb.
    pub fn redirect(&mut self, value: impl Into<String>, attr: RedirectAttr) {
        self.add(Verb::Redirect(Redirect {
            value: value.into(),
            attr,
        }));
    }

    /// Append an `<Enqueue>` verb.
    pub fn enqueue(&mut self, value: impl Into<String>, attr: EnqueueAttr) {
        self.add(Verb::Enqueue(Enqueue {
            value: value.into(),
            attr,
        }));
    }

    /// The verbs appended so far, in order.
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    fn to_document(&self) -> Document {
        let mut root = Element::new("Response");
        for verb in &self.verbs {
            root.child(verb.to_element());
        }
        Document { root }
    }

    /// Render the response as TwiML to the given sink.
    ///
    /// Fails only if the sink reports a write error, which is surfaced
    /// unchanged.
    pub fn to_xml<W: io::Write>(&self, sink: W) -> Result<()> {
        tracing::debug!(verbs = self.verbs.len(), "rendering response");
        xml::write_document(&self.to_document(), sink)
    }

    /// Render the response as a TwiML string.
    pub fn to_xml_string(&self) -> String {
        tracing::debug!(verbs = self.verbs.len(), "rendering response");
        xml::render(&self.to_document())
    }
}
