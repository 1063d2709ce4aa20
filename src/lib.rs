//! Decoder for the cluster events a native protocol server pushes to registered clients.
//!
//! `receiver::event_decoder::decode_event` turns the body of an Event message into an
//! `Event`, and `protocol::event_writer::write_event` produces the same bytes back.

pub mod errors {
    pub mod error_types;
}

pub mod protocol {
    pub mod event_writer;

    pub mod frames_headers {
        pub mod version;
    }

    pub mod protocol_body {
        pub mod event_kind;
        pub mod schema_change;
        pub mod status_node;
        pub mod topology_change;
    }

    pub mod protocol_notations {
        pub mod enum_value;
        pub mod protocol_body_writer;
    }
}

pub mod receiver {
    pub mod event_decoder;
    pub mod read_notation;
}

pub use errors::error_types::ErrorTypes;
pub use protocol::event_writer::write_event;
pub use protocol::frames_headers::version::ProtocolVersion;
pub use protocol::protocol_body::event_kind::{Event, EventType};
pub use receiver::event_decoder::decode_event;
