use std::fmt;

use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://workout.lol/";

pub const SHARE_PARAM: &str = "share_id";
pub const REPEAT_PARAM: &str = "repeat_id";

/// A deep link into the workout app. These URLs are bookmarked and shared,
/// so the parameter names above must not change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeepLink(Url);

impl DeepLink {
    pub fn with_query(base: &Url, pairs: &[(&str, &str)]) -> Self {
        let mut url = base.clone();
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in pairs {
                query.append_pair(key, value);
            }
        }
        DeepLink(url)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn share_link(base: &Url, workout_id: &str) -> DeepLink {
    DeepLink::with_query(base, &[(SHARE_PARAM, workout_id)])
}
