use querybridge::attributes::{UAttributes, UMessageType};
use querybridge::constants::ATTRIBUTES_ATTACHMENT_KEY;
use querybridge::transport::{Attachment, Query, Reply, Sample};

/// Answers queries published on one subject.
#[async_trait::async_trait]
pub trait Queryable: Send + Sync {
    /// Produces the replies for `query`, in delivery order.
    async fn reply(&self, query: &Query) -> Vec<Reply>;
}

#[async_trait::async_trait]
impl<F> Queryable for F
where
    F: Fn(&Query) -> Vec<Reply> + Send + Sync,
{
    async fn reply(&self, query: &Query) -> Vec<Reply> {
        self(query)
    }
}

/// A queryable that echoes the request payload back as a response, carrying
/// the request's id and priority in its attributes.
pub fn echo_queryable() -> impl Queryable + 'static {
    |query: &Query| {
        let Some(request) = query
            .attachment
            .get(ATTRIBUTES_ATTACHMENT_KEY)
            .and_then(|bytes| UAttributes::decode(bytes).ok())
        else {
            return vec![Reply::Err("request carries no attributes".to_string())];
        };

        let response = UAttributes {
            message_type: UMessageType::Response,
            ..request
        };

        vec![Reply::Ok(
            Sample::new(query.payload.clone()).with_attachment(
                Attachment::new().with(ATTRIBUTES_ATTACHMENT_KEY, response.encode()),
            ),
        )]
    }
}
