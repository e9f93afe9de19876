//! Request encoding and response decoding for the API's wire format.
//!
//! Pure functions only; nothing here touches the network.

pub mod decode;
pub mod encode;
pub mod form;

pub use decode::{decode_entity, decode_page, parse_envelope};
pub use encode::{ById, EncodeForm, encode};
pub use form::FormBody;

/// Fields a single-entity payload may be stored under, per entity.
pub mod fields {
    pub const ACCOUNT: &[&str] = &["account"];
    pub const MONITOR: &[&str] = &["monitor"];
    pub const ALERT_CONTACT: &[&str] = &["alertcontact", "alert_contact"];
    pub const MAINTENANCE_WINDOW: &[&str] = &["mwindow"];
    pub const STATUS_PAGE: &[&str] = &["psp"];
}
