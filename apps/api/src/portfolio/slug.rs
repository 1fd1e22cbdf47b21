use uuid::Uuid;

const SUFFIX_LEN: usize = 8;

/// Builds a route slug: the normalized username, an underscore, and 8 random hex chars.
///
/// Uniqueness rests on the random suffix alone; nothing checks existing slugs.
pub fn generate_route_slug(username: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}_{}", normalize_username(username), &suffix[..SUFFIX_LEN])
}

fn normalize_username(username: &str) -> String {
    username.to_lowercase().replace(' ', "_").replace('@', "_at_")
}
