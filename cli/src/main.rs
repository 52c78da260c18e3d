mod token_file;

use std::sync::Arc;

use chrono::{Local, Utc};
use clap::{Args, Parser, Subcommand};
use taskdeck::api::http::HttpApi;
use taskdeck::config::ClientConfig;
use taskdeck::route::guard_redirect;
use taskdeck::state::auth::{self, SignInForm, SignUpForm};
use taskdeck::state::home::{HomeState, TaskSummary};
use taskdeck::state::list_form::{EditListState, NewListState};
use taskdeck::state::task_form::{EditTaskState, NewTaskState};
use taskdeck::{ApiError, DisplayFilter, Route, Session, TaskApi, TokenStore, UiError};
use token_file::FileTokenStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not signed in; run `taskdeck signin` first")]
    NotSignedIn,
    #[error("{0}")]
    Ui(#[from] UiError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "taskdeck", about = "Task list API command-line client")]
struct Cli {
    #[arg(long, env = "TASKDECK_API_URL")]
    api_url: Option<String>,

    #[arg(long, env = "TASKDECK_TOKEN_FILE", default_value = ".taskdeck-token")]
    token_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Signin {
        #[arg(long)]
        email: String,
        #[arg(long, env = "TASKDECK_PASSWORD")]
        password: String,
    },
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "TASKDECK_PASSWORD")]
        password: String,
    },
    Signout,
    Lists(ListsCommand),
    Tasks(TasksCommand),
}

#[derive(Args, Debug)]
struct ListsCommand {
    #[command(subcommand)]
    command: ListsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ListsSubcommand {
    Ls,
    Show {
        list_id: String,
    },
    Create {
        #[arg(long)]
        title: String,
    },
    Rename {
        list_id: String,
        #[arg(long)]
        title: String,
    },
    Rm {
        list_id: String,
    },
}

#[derive(Args, Debug)]
struct TasksCommand {
    #[command(subcommand)]
    command: TasksSubcommand,
}

#[derive(Subcommand, Debug)]
enum TasksSubcommand {
    Ls {
        #[arg(long, help = "List id; defaults to the first list")]
        list: Option<String>,
        #[arg(long, conflicts_with = "todo", help = "Show completed tasks")]
        done: bool,
        #[arg(long, help = "Show open tasks (default)")]
        todo: bool,
    },
    Show {
        list_id: String,
        task_id: String,
    },
    Create {
        #[arg(long, help = "List id; defaults to the first list")]
        list: Option<String>,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        detail: String,
        #[arg(long, help = "Deadline: YYYY-MM-DDTHH:MM (local time) or RFC 3339")]
        limit: Option<String>,
    },
    Update {
        list_id: String,
        task_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        detail: Option<String>,
        #[arg(long)]
        done: Option<bool>,
        #[arg(long, help = "Deadline: YYYY-MM-DDTHH:MM (local time) or RFC 3339; empty clears it")]
        limit: Option<String>,
    },
    Rm {
        list_id: String,
        task_id: String,
    },
}

impl Command {
    /// Page whose guard applies to this command.
    fn route(&self) -> Route {
        match self {
            Self::Signin { .. } | Self::Signout => Route::SignIn,
            Self::Signup { .. } => Route::SignUp,
            Self::Lists(_) | Self::Tasks(_) => Route::Home,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(api_url) = &cli.api_url {
        config = config.with_api_url(api_url);
    }

    let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(&cli.token_file));
    let mut session = Session::default();
    if tokens.token().is_some() {
        session.sign_in();
    }
    if guard_redirect(&cli.command.route(), &session) == Some(Route::SignIn) {
        return Err(CliError::NotSignedIn);
    }

    let api = HttpApi::new(config, tokens.clone())?;
    tracing::debug!(api_url = %api.config().api_url, "client ready");

    match cli.command {
        Command::Signin { email, password } => {
            let form = SignInForm { email, password };
            auth::sign_in(&api, tokens.as_ref(), &mut session, &form).await?;
            eprintln!("signed in");
            Ok(())
        }
        Command::Signup { name, email, password } => {
            let form = SignUpForm { name, email, password };
            auth::sign_up(&api, tokens.as_ref(), &mut session, &form).await?;
            eprintln!("account created; signed in");
            Ok(())
        }
        Command::Signout => {
            auth::sign_out(&mut session, tokens.as_ref());
            eprintln!("signed out");
            Ok(())
        }
        Command::Lists(lists) => run_lists(&api, lists).await,
        Command::Tasks(tasks) => run_tasks(&api, tasks).await,
    }
}

async fn run_lists(api: &HttpApi, lists: ListsCommand) -> Result<(), CliError> {
    match lists.command {
        ListsSubcommand::Ls => {
            let mut home = HomeState::default();
            let result = api.lists().await;
            home.apply_lists(result);
            fail_on(home.error.take())?;
            for list in &home.lists {
                println!("{}\t{}", list.id, list.title);
            }
            Ok(())
        }
        ListsSubcommand::Show { list_id } => {
            let list = api.list(&list_id).await?;
            print_json(&serde_json::to_value(list)?)
        }
        ListsSubcommand::Create { title } => {
            let mut page = NewListState { title, ..NewListState::default() };
            page.submit(api).await?;
            eprintln!("list created");
            Ok(())
        }
        ListsSubcommand::Rename { list_id, title } => {
            let mut page = EditListState::new(&list_id);
            page.title = title;
            page.submit(api).await?;
            eprintln!("list renamed: {list_id}");
            Ok(())
        }
        ListsSubcommand::Rm { list_id } => {
            EditListState::new(&list_id).delete(api).await?;
            eprintln!("list deleted: {list_id}");
            Ok(())
        }
    }
}

async fn run_tasks(api: &HttpApi, tasks: TasksCommand) -> Result<(), CliError> {
    match tasks.command {
        TasksSubcommand::Ls { list, done, todo } => {
            let mut home = HomeState::default();
            match list {
                Some(list_id) => home.load_list(api, &list_id).await,
                None => home.load(api).await,
            }
            fail_on(home.error.take())?;
            home.set_filter(if done && !todo { DisplayFilter::Done } else { DisplayFilter::Todo });

            let Some(list_id) = home.selected_list_id.clone() else {
                eprintln!("no lists");
                return Ok(());
            };
            let now = Utc::now();
            for task in home.visible_tasks() {
                let summary = TaskSummary::from_task(&list_id, task, now);
                println!("{}\t{}\t{}\t{}\t{}", task.id, summary.title, summary.status, summary.limit, summary.remaining);
            }
            Ok(())
        }
        TasksSubcommand::Show { list_id, task_id } => {
            let task = api.task(&list_id, &task_id).await?;
            print_json(&serde_json::to_value(task)?)
        }
        TasksSubcommand::Create { list, title, detail, limit } => {
            let mut page = NewTaskState::default();
            page.load(api).await;
            if let Some(list_id) = list {
                page.select_list(&list_id);
            }
            page.form.title = title;
            page.form.detail = detail;
            if let Some(raw) = limit {
                page.set_deadline_input(&raw, Local);
            }
            fail_on(page.error.take())?;
            page.submit(api).await?;
            eprintln!("task created");
            Ok(())
        }
        TasksSubcommand::Update { list_id, task_id, title, detail, done, limit } => {
            let mut page = EditTaskState::new(&list_id, &task_id);
            page.load(api).await;
            fail_on(page.error.take())?;
            if let Some(title) = title {
                page.form.title = title;
            }
            if let Some(detail) = detail {
                page.form.detail = detail;
            }
            if let Some(done) = done {
                page.form.done = done;
            }
            if let Some(raw) = limit {
                page.set_deadline_input(&raw, Local);
                fail_on(page.error.take())?;
            }
            page.submit(api).await?;
            eprintln!("task updated: {task_id}");
            Ok(())
        }
        TasksSubcommand::Rm { list_id, task_id } => {
            EditTaskState::new(&list_id, &task_id).delete(api).await?;
            eprintln!("task deleted: {task_id}");
            Ok(())
        }
    }
}

fn fail_on(error: Option<UiError>) -> Result<(), CliError> {
    error.map_or(Ok(()), |err| Err(CliError::Ui(err)))
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
