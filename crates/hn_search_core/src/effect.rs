use crate::FetchRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch {
        request_id: crate::RequestId,
        url: String,
    },
}

impl From<FetchRequest> for Effect {
    fn from(request: FetchRequest) -> Self {
        Effect::Fetch {
            request_id: request.request_id,
            url: request.url,
        }
    }
}
