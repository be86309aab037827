use serde::Deserialize;
use validator::Validate;

/// 팔로우 요청 구조체
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    /// 팔로우할 대상 사용자 ID
    #[validate(length(min = 1, message = "followedId is required"))]
    pub followed_id: String,
}
