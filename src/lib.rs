//! twiml - Typed builder for TwiML call-control responses
//!
//! TwiML is the XML vocabulary a telephony platform executes to drive a
//! call: speak text, dial a number, record audio, gather digits. This crate
//! builds a tree of typed verb nodes and renders it as the exact dialect the
//! platform consumes.
//!
//! # Quick Start
//!
//! ```
//! use twiml::{Response, SayAttr};
//!
//! let mut response = Response::new();
//! response.say("Hello, world!", SayAttr::default());
//! assert_eq!(
//!     response.to_xml_string(),
//!     "<Response>\n  <Say>Hello, world!</Say>\n</Response>"
//! );
//! ```
//!
//! Container verbs hand back a handle for nested appends:
//!
//! ```
//! use twiml::{DialAttr, NumberAttr, Response};
//!
//! let mut response = Response::new();
//! response
//!     .dial(DialAttr::default())
//!     .number("+12223334455", NumberAttr::default());
//! # fn sink() -> std::io::Sink { std::io::sink() }
//! # response.to_xml(sink()).unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod xml;
pub use xml::{Content as XmlContent, Document as XmlDocument, Element as XmlElement};

pub mod verb;
pub use verb::{
    Enqueue, EnqueueAttr, Gather, GatherAttr, GatherChild, Pause, PauseAttr, Play, PlayAttr,
    Record, RecordAttr, Redirect, RedirectAttr, Reject, Say, SayAttr, Verb,
};

pub mod dial;
pub use dial::{
    Client, ClientAttr, Conference, ConferenceAttr, Dial, DialAttr, Noun, Number, NumberAttr,
    Sip, SipAttr,
};

pub mod response;
pub use response::Response;
