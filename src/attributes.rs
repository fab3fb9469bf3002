mod attributes_builder;
mod attributes_error;
mod u_attributes;
mod u_message_type;
mod u_priority;

pub use attributes_builder::UAttributesBuilder;
pub use attributes_error::AttributesError;
pub use u_attributes::UAttributes;
pub use u_message_type::UMessageType;
pub use u_priority::UPriority;
