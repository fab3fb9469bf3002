use super::UriError;
use crate::constants::{RPC_RESOURCE_NAME, RPC_RESPONSE_INSTANCE};
use std::fmt;
use std::str::FromStr;

/// The software entity (service) a resource belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UEntity {
    pub name: String,
    pub version_major: Option<u32>,
}

impl UEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version_major: None,
        }
    }

    pub fn with_version(mut self, version_major: u32) -> Self {
        self.version_major = Some(version_major);
        self
    }
}

/// A resource exposed by an entity, e.g. `door.front_left#Door` or
/// `rpc.UpdateDoor`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UResource {
    pub name: String,
    pub instance: Option<String>,
    pub message: Option<String>,
}

impl UResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instance: None,
            message: None,
        }
    }

    /// A resource that addresses the RPC method `method`.
    pub fn rpc(method: impl Into<String>) -> Self {
        Self::new(RPC_RESOURCE_NAME).with_instance(method)
    }

    /// The resource replies are addressed to.
    pub fn rpc_response() -> Self {
        Self::rpc(RPC_RESPONSE_INSTANCE)
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Logical address of a resource, independent of any transport subject.
///
/// The canonical ("long") form is
/// `//authority/entity/version/resource.instance#message`, with the
/// `//authority` prefix omitted for local resources and an empty version
/// segment when the entity is unversioned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UUri {
    pub authority: Option<String>,
    pub entity: UEntity,
    pub resource: UResource,
}

impl UUri {
    /// A resource identifier local to the current device.
    pub fn local(entity: UEntity, resource: UResource) -> Self {
        Self {
            authority: None,
            entity,
            resource,
        }
    }

    /// A resource identifier that lives on `authority`.
    pub fn remote(authority: impl Into<String>, entity: UEntity, resource: UResource) -> Self {
        Self {
            authority: Some(authority.into()),
            entity,
            resource,
        }
    }

    /// Whether this identifier names an RPC method (`rpc.<method>`).
    ///
    /// The response resource `rpc.response` is not a callable method.
    pub fn is_rpc_method(&self) -> bool {
        self.resource.name == RPC_RESOURCE_NAME
            && matches!(
                self.resource.instance.as_deref(),
                Some(instance) if !instance.is_empty() && instance != RPC_RESPONSE_INSTANCE
            )
    }

    /// The response address belonging to this identifier's entity.
    pub fn rpc_response(&self) -> UUri {
        UUri {
            authority: self.authority.clone(),
            entity: self.entity.clone(),
            resource: UResource::rpc_response(),
        }
    }

    /// Serializes the identifier into its canonical long form.
    pub fn to_long_uri(&self) -> String {
        let mut out = String::new();

        if let Some(authority) = &self.authority {
            out.push_str("//");
            out.push_str(authority);
        }

        out.push('/');
        out.push_str(&self.entity.name);
        out.push('/');
        if let Some(version) = self.entity.version_major {
            out.push_str(&version.to_string());
        }

        out.push('/');
        out.push_str(&self.resource.name);
        if let Some(instance) = &self.resource.instance {
            out.push('.');
            out.push_str(instance);
        }
        if let Some(message) = &self.resource.message {
            out.push('#');
            out.push_str(message);
        }

        out
    }
}

impl fmt::Display for UUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_long_uri())
    }
}

impl FromStr for UUri {
    type Err = UriError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(UriError::Empty);
        }

        let malformed = || UriError::Malformed(input.to_string());

        let (authority, path) = match input.strip_prefix("//") {
            Some(rest) => {
                let (authority, path) = rest.split_once('/').ok_or_else(malformed)?;
                if authority.is_empty() {
                    return Err(malformed());
                }
                (Some(authority.to_string()), path)
            }
            None => (None, input.strip_prefix('/').ok_or_else(malformed)?),
        };

        let mut segments = path.split('/');
        let (Some(entity_name), Some(version), Some(resource), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(malformed());
        };

        if entity_name.is_empty() || resource.is_empty() {
            return Err(malformed());
        }

        let version_major = match version {
            "" => None,
            v => Some(
                v.parse::<u32>()
                    .map_err(|_| UriError::InvalidVersion(v.to_string()))?,
            ),
        };

        let (resource, message) = match resource.split_once('#') {
            Some((resource, message)) => (resource, Some(message.to_string())),
            None => (resource, None),
        };

        let (name, instance) = match resource.split_once('.') {
            Some((name, instance)) => (name, Some(instance.to_string())),
            None => (resource, None),
        };

        if name.is_empty() {
            return Err(malformed());
        }

        Ok(UUri {
            authority,
            entity: UEntity {
                name: entity_name.to_string(),
                version_major,
            },
            resource: UResource {
                name: name.to_string(),
                instance,
                message,
            },
        })
    }
}
