use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::status::{describe_events, latest_status};

#[derive(Debug, Clone)]
pub struct RenderCommandArgs {
    pub latest: bool,
}

pub async fn run(ctx: &AppContext, args: RenderCommandArgs) -> AppResult<Vec<String>> {
    if args.latest {
        Ok(latest_status(ctx).await?.into_iter().collect())
    } else {
        describe_events(ctx).await
    }
}
