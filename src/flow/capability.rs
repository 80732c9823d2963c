use crate::Result;
use async_trait::async_trait;

/// A typed external transformation: structured input in, structured output
/// out. How the call is transported is up to the implementation.
#[async_trait]
pub trait Capability<In, Out>: Send + Sync {
    async fn invoke(&self, input: In) -> Result<Out>;
}
