use num_enum::{IntoPrimitive, TryFromPrimitive};

#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum UMessageType {
    Publish = 1,
    Request = 2,
    Response = 3,
    Notification = 4,
}
