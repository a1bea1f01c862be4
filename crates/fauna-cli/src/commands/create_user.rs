//! Create user command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fauna_core::{CollectionName, Database, NewUser, Password, UserData};

use crate::config::AdminConfig;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateUserArgs {
    /// Collection to create the user document in
    #[arg(long, default_value = "login_test")]
    pub collection: String,

    /// Value of the document's `name` attribute
    #[arg(long, default_value = "player 1")]
    pub name: String,

    /// Document attributes as a JSON object (overrides --name)
    #[arg(long)]
    pub data: Option<String>,

    /// Password credential for the new user
    #[arg(long, default_value = "Password")]
    pub password: String,
}

impl CreateUserArgs {
    fn user_data(&self) -> Result<UserData> {
        match &self.data {
            Some(json) => {
                let value = serde_json::from_str(json).context("Invalid JSON in --data")?;
                UserData::new(value).context("Invalid user data")
            }
            None => Ok(UserData::with_name(&self.name)),
        }
    }
}

pub async fn run(args: CreateUserArgs, config: &AdminConfig) -> Result<()> {
    let collection = CollectionName::new(&args.collection).context("Invalid collection name")?;
    let user = NewUser::new(args.user_data()?, Password::new(&args.password));

    let db = config.connect()?;
    output::progress(&format!("Creating user in {}...", db.url()));

    let record = db
        .create_user(&collection, &user)
        .await
        .context("Failed to create user")?;

    output::record(&record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(data: Option<&str>) -> CreateUserArgs {
        CreateUserArgs {
            collection: "login_test".to_string(),
            name: "player 1".to_string(),
            data: data.map(str::to_string),
            password: "Password".to_string(),
        }
    }

    #[test]
    fn name_is_used_without_data() {
        let data = args(None).user_data().unwrap();
        assert_eq!(data.get("name"), Some(&json!("player 1")));
    }

    #[test]
    fn data_overrides_name() {
        let data = args(Some(r#"{"name":"player 2","level":3}"#))
            .user_data()
            .unwrap();
        assert_eq!(data.get("name"), Some(&json!("player 2")));
        assert_eq!(data.get("level"), Some(&json!(3)));
    }

    #[test]
    fn data_must_be_an_object() {
        assert!(args(Some("[1,2]")).user_data().is_err());
        assert!(args(Some("{not json")).user_data().is_err());
    }
}
