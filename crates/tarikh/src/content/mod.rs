//! Static page content: the guide chat, the timeline and the topic list.

pub mod chat;
pub mod timeline;
pub mod topics;
