//! 알림 종류별 최종 메시지 조립 단계.

use anyhow::Result;

use crate::domain::message;
use crate::domain::notification::{NotificationRequest, summarize_job_results};

use super::resolver::EventResolver;

/// 요청 종류에 맞는 템플릿으로 메시지를 만든다. custom은 입력을 그대로 쓴다.
pub(super) async fn build_message(
    resolver: &EventResolver<'_>,
    request: &NotificationRequest,
) -> Result<String> {
    let ctx = resolver.context();

    match request {
        NotificationRequest::Result { job_results } => {
            let summary = summarize_job_results(job_results);
            let description = resolver.describe_event(None).await?;
            Ok(message::result_message(ctx, &summary, &description))
        }
        NotificationRequest::Reviewers { reviewers, author } => {
            let description = resolver.describe_event(Some(author)).await?;
            Ok(message::reviewers_message(ctx, reviewers, &description))
        }
        NotificationRequest::Assignee { assignee, author } => {
            let description = resolver.describe_event(Some(author)).await?;
            Ok(message::assignee_message(ctx, assignee, &description))
        }
        NotificationRequest::Custom { message } => Ok(message.clone()),
    }
}
