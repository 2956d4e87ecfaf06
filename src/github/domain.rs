use serde::Deserialize;

// API: https://docs.github.com/en/rest/users/users#get-a-user
#[derive(Debug, Deserialize)]
pub struct UserGet {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub r#type: String, // "User" or "Organization"
    pub avatar_url: String,
}

// API: https://docs.github.com/en/rest/repos/repos#list-repositories-for-a-user
#[derive(Debug, Deserialize)]
pub struct RepoGet {
    pub name: String,
}

#[derive(PartialEq, Debug)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub account_type: String,
    pub avatar_url: String,
    pub repositories: Vec<String>,
}

impl Profile {
    pub fn new(user: UserGet, repos: Vec<RepoGet>) -> Self {
        Profile {
            login: user.login,
            name: user.name,
            bio: user.bio,
            followers: user.followers,
            following: user.following,
            account_type: user.r#type,
            avatar_url: user.avatar_url,
            repositories: repos.into_iter().map(|repo| repo.name).collect(),
        }
    }
}
