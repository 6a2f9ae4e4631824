use serde::{Deserialize, Serialize};

/// A client profile as held by the store
///
/// `token` is a credential. It is only ever echoed back by PATCH; GET
/// responses go through [`ProfileView`] instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ClientProfile {
    pub email: String,
    pub id: String,
    pub name: String,
    pub token: String,
}

impl ClientProfile {
    pub fn new(id: &str, name: &str, email: &str, token: &str) -> Self {
        Self {
            email: email.to_string(),
            id: id.to_string(),
            name: name.to_string(),
            token: token.to_string(),
        }
    }

    /// True when every field is empty
    pub fn is_blank(&self) -> bool {
        self.email.is_empty() && self.id.is_empty() && self.name.is_empty() && self.token.is_empty()
    }
}

/// Response type for successful GET operations (no token)
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileView {
    pub email: String,
    pub id: String,
    pub name: String,
}

impl From<&ClientProfile> for ProfileView {
    fn from(profile: &ClientProfile) -> Self {
        Self {
            email: profile.email.clone(),
            id: profile.id.clone(),
            name: profile.name.clone(),
        }
    }
}

/// Request body for PATCH operations
///
/// Keys are matched case-insensitively and a later key overrides an earlier
/// one, so `{"name": "a", "NAME": "b"}` sets the name to `b`. `Id` and
/// `Token` must be strings or null when present, but their values are
/// dropped. Unknown keys are ignored.
#[derive(Debug, Default, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl<'de> Deserialize<'de> for ProfilePatch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(PatchVisitor)
    }
}

struct PatchVisitor;

impl<'de> serde::de::Visitor<'de> for PatchVisitor {
    type Value = ProfilePatch;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a client profile object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut patch = ProfilePatch::default();
        while let Some(key) = map.next_key::<String>()? {
            // null leaves whatever an earlier key set
            if key.eq_ignore_ascii_case("name") {
                if let Some(name) = map.next_value::<Option<String>>()? {
                    patch.name = Some(name);
                }
            } else if key.eq_ignore_ascii_case("email") {
                if let Some(email) = map.next_value::<Option<String>>()? {
                    patch.email = Some(email);
                }
            } else if key.eq_ignore_ascii_case("id") || key.eq_ignore_ascii_case("token") {
                map.next_value::<Option<String>>()?;
            } else {
                map.next_value::<serde::de::IgnoredAny>()?;
            }
        }
        Ok(patch)
    }
}

impl ProfilePatch {
    /// Decode the first JSON value in `body`.
    ///
    /// A literal `null` yields an empty patch. Bytes after the first value
    /// are not inspected.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Self>>();
        match values.next() {
            Some(value) => Ok(value?.unwrap_or_default()),
            // Empty input: let serde_json produce its EOF error
            None => serde_json::from_slice::<Self>(body),
        }
    }

    /// Apply non-empty fields onto `profile`.
    pub fn merge_into(&self, profile: &mut ClientProfile) {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            profile.name = name.to_string();
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            profile.email = email.to_string();
        }
    }
}

/// Query parameters shared by every `/user/profile` method
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProfileQuery {
    #[serde(rename = "clientId")]
    pub client_id: Option<String>,
}

impl ProfileQuery {
    /// Build from decoded query pairs; the first `clientId` wins
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let client_id = pairs
            .into_iter()
            .find(|(key, _)| key == "clientId")
            .map(|(_, value)| value);
        Self { client_id }
    }

    /// The `clientId` parameter, with an empty value treated as absent
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub profiles: usize,
}
