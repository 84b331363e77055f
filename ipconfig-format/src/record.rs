use std::fmt;

use crate::schema::{AttributeType, TERMINAL_KEY};

/// An address with its subnet prefix length.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Link {
    pub address: String,
    pub prefix: u32,
}

impl Link {
    pub fn new<S: Into<String>>(address: S, prefix: u32) -> Link {
        Link {
            address: address.into(),
            prefix,
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Route {
    /// A destination with a zero prefix is never written, in either format. Use
    /// [`Route::destination`] to see the destination that will be written.
    pub destination: Option<Link>,
    pub next_hop: Option<String>,
}

impl Route {
    /// A destination with a zero prefix is dropped.
    pub fn new<S: Into<String>>(destination: Option<Link>, next_hop: Option<S>) -> Route {
        Route {
            destination: destination.filter(|link| link.prefix != 0),
            next_hop: next_hop.map(Into::into),
        }
    }

    /// A route without a destination.
    pub fn default_via<S: Into<String>>(next_hop: S) -> Route {
        Route {
            destination: None,
            next_hop: Some(next_hop.into()),
        }
    }

    /// The destination, if it is fully set. A zero prefix counts as unset.
    #[inline(always)]
    pub fn destination(&self) -> Option<&Link> {
        self.destination.as_ref().filter(|link| link.prefix != 0)
    }

    #[inline(always)]
    pub fn next_hop(&self) -> Option<&str> {
        self.next_hop.as_deref()
    }

    #[inline(always)]
    pub fn is_default(&self) -> bool {
        self.destination().is_none()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.destination(), self.next_hop()) {
            (Some(destination), Some(next_hop)) => write!(f, "{} {}", destination, next_hop),
            // The trailing space keeps the destination from reading back as a next hop.
            (Some(destination), None) => write!(f, "{} ", destination),
            (None, Some(next_hop)) => write!(f, "{}", next_hop),
            (None, None) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AttributeValue {
    Terminal,
    Integer(u32),
    String(String),
    Link(Link),
    Route(Route),
}

impl AttributeValue {
    #[inline(always)]
    pub fn ty(&self) -> AttributeType {
        match self {
            AttributeValue::Terminal => AttributeType::Terminal,
            AttributeValue::Integer(_) => AttributeType::Integer,
            AttributeValue::String(_) => AttributeType::String,
            AttributeValue::Link(_) => AttributeType::Link,
            AttributeValue::Route(_) => AttributeType::Route,
        }
    }

    #[inline(always)]
    pub fn as_integer(&self) -> Option<u32> {
        match self {
            AttributeValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(value) => Some(value),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn as_link(&self) -> Option<&Link> {
        match self {
            AttributeValue::Link(link) => Some(link),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn as_route(&self) -> Option<&Route> {
        match self {
            AttributeValue::Route(route) => Some(route),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Attribute {
    pub key: String,
    pub value: AttributeValue,
}

impl Attribute {
    pub fn new<S: Into<String>>(key: S, value: AttributeValue) -> Attribute {
        Attribute {
            key: key.into(),
            value,
        }
    }

    pub fn terminal() -> Attribute {
        Attribute::new(TERMINAL_KEY, AttributeValue::Terminal)
    }

    #[inline(always)]
    pub fn ty(&self) -> AttributeType {
        self.value.ty()
    }

    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        self.ty() == AttributeType::Terminal
    }
}

/// A versioned, ordered list of attributes.
///
/// Attributes keep their insertion order. Duplicate keys are kept as they are.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Config {
    pub(crate) version: u32,
    pub(crate) attributes: Vec<Attribute>,
}

impl Config {
    pub fn new(version: u32) -> Config {
        Config {
            version,
            attributes: vec![],
        }
    }

    #[inline(always)]
    pub fn version(&self) -> u32 {
        self.version
    }

    #[inline(always)]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    #[inline(always)]
    pub fn push(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// First attribute with `key`.
    #[inline(always)]
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|attribute| attribute.key == key)
            .map(|attribute| &attribute.value)
    }

    #[inline(always)]
    pub fn is_terminated(&self) -> bool {
        self.attributes.iter().any(Attribute::is_terminal)
    }

    #[inline(always)]
    pub fn into_attributes(self) -> Vec<Attribute> {
        self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_text_forms() {
        let route = Route::new(Some(Link::new("10.0.0.0", 24)), Some("10.0.0.1"));
        assert_eq!(route.to_string(), "10.0.0.0/24 10.0.0.1");

        let route = Route::default_via("0.0.0.0");
        assert!(route.is_default());
        assert_eq!(route.to_string(), "0.0.0.0");

        let route = Route::new::<String>(Some(Link::new("192.168.1.0", 24)), None);
        assert_eq!(route.to_string(), "192.168.1.0/24 ");
        assert_eq!(route.to_string().parse::<Route>().unwrap(), route);
        assert_eq!(Route::default().to_string(), "");
    }

    #[test]
    fn zero_prefix_destination_is_unset() {
        let route = Route::new(Some(Link::new("0.0.0.0", 0)), Some("10.0.0.1"));
        assert_eq!(route.destination, None);
        assert_eq!(route, Route::default_via("10.0.0.1"));

        let route = Route {
            destination: Some(Link::new("0.0.0.0", 0)),
            next_hop: Some("10.0.0.1".into()),
        };
        assert!(route.destination().is_none());
        assert_eq!(route.to_string(), "10.0.0.1");
    }

    #[test]
    fn value_type_follows_variant() {
        assert_eq!(AttributeValue::Integer(3).ty(), AttributeType::Integer);
        assert_eq!(
            AttributeValue::Link(Link::new("10.0.0.2", 8)).ty(),
            AttributeType::Link
        );
        assert_eq!(AttributeValue::Integer(3).as_str(), None);
        assert!(Attribute::terminal().is_terminal());
    }

    #[test]
    fn config_keeps_order_and_duplicates() {
        let mut config = Config::new(2);
        config.push(Attribute::new("dns", AttributeValue::String("8.8.8.8".into())));
        config.push(Attribute::new("dns", AttributeValue::String("8.8.4.4".into())));

        assert_eq!(config.attributes().len(), 2);
        assert_eq!(config.get("dns").and_then(|v| v.as_str()), Some("8.8.8.8"));
        assert!(!config.is_terminated());

        config.push(Attribute::terminal());
        assert!(config.is_terminated());
    }
}
