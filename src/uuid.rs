mod uuid_v8;

pub use uuid_v8::Uuid;
