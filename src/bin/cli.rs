use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use pearldecor::cli::{create_admin, migrate};
use pearldecor_config::DatabaseConfig;
use pearldecor_db::{PgPool, init_db_pool};

#[derive(Parser)]
#[command(name = "pearldecor-cli")]
#[command(about = "Pearl Decor CLI - Administrative tools for the Pearl Decor API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an admin account with its employee record
    CreateAdmin {
        /// Login name
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Display name stored on the employee record
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Free-form permissions string
        #[arg(long)]
        permissions: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Apply pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let database_config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&database_config).await?;

    match cli.command {
        Commands::CreateAdmin {
            username,
            name,
            permissions,
            password,
        } => handle_create_admin(&pool, username, name, permissions, password).await,
        Commands::Migrate => handle_migrate(&pool).await,
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    username: Option<String>,
    name: Option<String>,
    permissions: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    match create_admin(pool, &username, &password, &name, permissions).await {
        Ok(user) => {
            println!("\n✅ Admin created successfully!");
            println!("   Username: {}", user.username);
            println!("   User ID: {}", user.id);
            Ok(())
        }
        Err(e) => {
            eprintln!("\n❌ Error creating admin: {}", e.error);
            std::process::exit(1);
        }
    }
}

async fn handle_migrate(pool: &PgPool) -> anyhow::Result<()> {
    match migrate(pool).await {
        Ok(()) => {
            println!("✅ Migrations applied");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Error running migrations: {}", e.error);
            std::process::exit(1);
        }
    }
}
