//! Operator command line.

use clap::{Args, Parser, Subcommand};

use ewallet_hex::{SignupService, WalletService};
use ewallet_types::{
    Pageable, PasswordHasher, RoleResolver, SignupRequest, UserId, UserRepository, WalletId,
    WalletStore,
};

#[derive(Parser)]
#[command(name = "ewallet")]
#[command(author, version, about = "E-wallet operator CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new user
    Signup(SignupArgs),
    /// Wallet lookups
    Wallet {
        #[command(subcommand)]
        action: WalletCommands,
    },
}

#[derive(Args)]
pub struct SignupArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    /// Plaintext password, hashed before it is stored
    #[arg(long, env = "EWALLET_SIGNUP_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long)]
    phone_number: Option<String>,
    /// Role to grant (USER, ADMIN); repeatable
    #[arg(long = "role")]
    roles: Vec<String>,
}

impl From<SignupArgs> for SignupRequest {
    fn from(args: SignupArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            username: args.username,
            email: args.email,
            password: args.password,
            phone_number: args.phone_number,
            roles: args.roles.into_iter().collect(),
        }
    }
}

#[derive(Subcommand)]
pub enum WalletCommands {
    /// Get a wallet by id
    Get { id: WalletId },
    /// Get a wallet by IBAN
    Iban { iban: String },
    /// List the wallets of a user
    User { user_id: UserId },
    /// List wallets page by page
    List {
        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = Pageable::DEFAULT_SIZE)]
        size: u32,
    },
}

/// Runs one command and returns its result as pretty-printed JSON.
pub async fn run<S, U, H, R>(
    command: Commands,
    wallets: &WalletService<S>,
    signup: &SignupService<U, H, R>,
) -> anyhow::Result<String>
where
    S: WalletStore,
    U: UserRepository,
    H: PasswordHasher,
    R: RoleResolver,
{
    let output = match command {
        Commands::Signup(args) => {
            let user = signup.signup(args.into()).await?;
            serde_json::to_string_pretty(&user)?
        }

        Commands::Wallet { action } => match action {
            WalletCommands::Get { id } => {
                serde_json::to_string_pretty(&wallets.find_by_id(id).await?)?
            }
            WalletCommands::Iban { iban } => {
                serde_json::to_string_pretty(&wallets.find_by_iban(&iban).await?)?
            }
            WalletCommands::User { user_id } => {
                serde_json::to_string_pretty(&wallets.find_by_user_id(user_id).await?)?
            }
            WalletCommands::List { page, size } => {
                let page = wallets.find_all(Pageable::new(page, size)).await?;
                serde_json::to_string_pretty(&page)?
            }
        },
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signup_with_roles() {
        let cli = Cli::try_parse_from([
            "ewallet",
            "signup",
            "--first-name",
            "bob",
            "--last-name",
            "smith",
            "--username",
            "Bob",
            "--email",
            "bob@x.com",
            "--password",
            "s3cret-pass",
            "--role",
            "USER",
            "--role",
            "ADMIN",
        ])
        .unwrap();

        let Commands::Signup(args) = cli.command else {
            panic!("expected signup");
        };
        let req = SignupRequest::from(args);
        assert_eq!(req.username, "Bob");
        assert_eq!(req.roles.len(), 2);
        assert!(req.phone_number.is_none());
    }

    #[test]
    fn test_parse_wallet_list_defaults() {
        let cli = Cli::try_parse_from(["ewallet", "wallet", "list"]).unwrap();

        assert!(matches!(
            cli.command,
            Commands::Wallet {
                action: WalletCommands::List { page: 0, size: Pageable::DEFAULT_SIZE }
            }
        ));
    }

    #[test]
    fn test_parse_wallet_id_must_be_numeric() {
        assert!(Cli::try_parse_from(["ewallet", "wallet", "get", "abc"]).is_err());

        let cli = Cli::try_parse_from(["ewallet", "wallet", "get", "42"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Wallet { action: WalletCommands::Get { id } } if id == WalletId::new(42)
        ));
    }

    #[cfg(feature = "sqlite")]
    mod against_sqlite {
        use ewallet_hex::SignupRequestMapper;
        use ewallet_repo::{BcryptPasswordHasher, SqliteRepo};
        use ewallet_types::AppError;

        use super::super::*;

        #[tokio::test]
        async fn test_signup_then_list_user_wallets() {
            let repo = SqliteRepo::new("sqlite::memory:").await.unwrap();
            let wallets = WalletService::new(repo.clone());
            let signup = SignupService::new(
                repo.clone(),
                SignupRequestMapper::new(BcryptPasswordHasher::new(4), repo.clone()),
            );

            let cli = Cli::try_parse_from([
                "ewallet",
                "signup",
                "--first-name",
                "alice",
                "--last-name",
                "doe",
                "--username",
                "alice",
                "--email",
                "alice@x.com",
                "--password",
                "password1",
                "--role",
                "USER",
            ])
            .unwrap();
            let output = run(cli.command, &wallets, &signup).await.unwrap();
            let user: serde_json::Value = serde_json::from_str(&output).unwrap();
            assert_eq!(user["first_name"], "Alice");
            assert!(user.get("password").is_none());

            let id = user["id"].as_i64().unwrap().to_string();
            let cli = Cli::try_parse_from(["ewallet", "wallet", "user", id.as_str()]).unwrap();
            let output = run(cli.command, &wallets, &signup).await.unwrap();
            assert_eq!(output, "[]");
        }

        #[tokio::test]
        async fn test_missing_wallet_is_an_error() {
            let repo = SqliteRepo::new("sqlite::memory:").await.unwrap();
            let wallets = WalletService::new(repo.clone());
            let signup = SignupService::new(
                repo.clone(),
                SignupRequestMapper::new(BcryptPasswordHasher::new(4), repo),
            );

            let cli = Cli::try_parse_from(["ewallet", "wallet", "iban", "UNKNOWN"]).unwrap();
            let err = run(cli.command, &wallets, &signup).await.unwrap_err();

            assert!(matches!(
                err.downcast_ref::<AppError>(),
                Some(AppError::NotFound(key)) if key == "UNKNOWN"
            ));
        }
    }
}
