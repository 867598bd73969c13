use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;

use filebox_client::api::{self, ItemKind, ProgressCallback, UploadFile};
use filebox_client::{ApiClient, ApiError, ClientConfig};

#[derive(Parser, Debug)]
#[command(name = "filebox", version, about = "Command-line client for the file server")]
struct Args {
    /// Server base URL (overrides FILEBOX_API_URL / API_BASE_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log in with this user before running the command
    #[arg(long, global = true, env = "FILEBOX_USERNAME")]
    username: Option<String>,

    #[arg(long, global = true, env = "FILEBOX_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check credentials (requires --username and --password)
    Login,
    /// Show whether the session is authenticated
    Session,
    Logout,
    /// List a folder (root when omitted)
    Ls {
        #[arg(default_value = "")]
        folder: String,
    },
    Upload {
        file: PathBuf,
        #[arg(long)]
        folder: Option<String>,
    },
    Download {
        filename: String,
        #[arg(long, default_value = "")]
        folder: String,
        /// Output path (defaults to the file's base name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete a file
    Rm { path: String },
    /// Delete a folder and its contents
    Rmdir { path: String },
    Mkdir { path: String },
    Rename {
        path: String,
        new_name: String,
        /// file or folder
        #[arg(long = "type", default_value = "file")]
        kind: ItemKind,
    },
    Mv { src_path: String, dest_folder: String },
    /// Show the current user and the system-update note
    Updates,
    /// Replace the system-update note (admin)
    SaveUpdate { content: String },
}

#[tokio::main]
async fn main() {
    // .env before clap so FILEBOX_* credentials can live there too
    let _ = dotenvy::dotenv();
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), ApiError> {
    let config = match args.api_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };
    let client = ApiClient::from_config(&config)?;
    log::info!("Using file server at {}", client.base_url());

    if let (Some(username), Some(password)) = (&args.username, &args.password) {
        let resp = api::login(&client, username, password).await?;
        if matches!(args.command, Command::Login) {
            return print_json(&resp);
        }
    } else if matches!(args.command, Command::Login) {
        return Err(ApiError::Rejected {
            status: None,
            message: "login requires --username and --password".to_string(),
        });
    }

    match args.command {
        Command::Login => Ok(()),
        Command::Session => print_json(&api::check_session(&client).await?),
        Command::Logout => print_json(&api::logout(&client).await?),
        Command::Ls { folder } => print_json(&api::fetch_files(&client, &folder).await?),
        Command::Upload { file, folder } => {
            let upload = UploadFile::from_path(&file).await?;
            let progress: ProgressCallback =
                Arc::new(|pct: u8| eprint!("\ruploading... {:>3}%", pct));
            let resp = api::upload_file(&client, upload, folder.as_deref(), Some(progress)).await;
            eprintln!();
            print_json(&resp?)
        }
        Command::Download {
            filename,
            folder,
            output,
        } => {
            let bytes = api::download_file(&client, &filename, &folder).await?;
            let output = output.unwrap_or_else(|| {
                PathBuf::from(filename.rsplit('/').next().unwrap_or(filename.as_str()))
            });
            tokio::fs::write(&output, &bytes).await?;
            log::info!("Saved {} bytes to {}", bytes.len(), output.display());
            Ok(())
        }
        Command::Rm { path } => print_json(&api::delete_file(&client, &path).await?),
        Command::Rmdir { path } => print_json(&api::delete_folder(&client, &path).await?),
        Command::Mkdir { path } => print_json(&api::create_folder(&client, &path).await?),
        Command::Rename {
            path,
            new_name,
            kind,
        } => print_json(&api::rename_item(&client, &path, &new_name, kind).await?),
        Command::Mv {
            src_path,
            dest_folder,
        } => print_json(&api::move_file(&client, &src_path, &dest_folder).await?),
        Command::Updates => print_json(&api::fetch_user_and_updates(&client).await?),
        Command::SaveUpdate { content } => print_json(&api::save_update(&client, &content).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ApiError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
