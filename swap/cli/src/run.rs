use {
    crate::{config::Config, gateway::LoggingGateway},
    anyhow::Context,
    clap::Parser,
    serde::Deserialize,
    serde_json::{Value as Json, json},
    std::{fs, path::PathBuf},
    swap_app::{App, AppResult},
    swap_pool::{PoolError, SenderAuthorizer},
    swap_storage::{MemStorage, StdError},
    swap_types::{ExecuteMsg, Name, QueryMsg, Response, TransferNotice},
};

#[derive(Parser)]
pub struct RunCmd {
    /// Path to a JSON file holding a list of actions
    script: PathBuf,
}

/// One step of a script.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum Action {
    /// Call an entry point as `sender`.
    Execute { sender: Name, msg: ExecuteMsg },
    /// Deliver a transfer notice from the token contract that issued it.
    Transfer {
        token_contract: Name,
        notice: TransferNotice,
    },
    Query { msg: QueryMsg },
}

impl RunCmd {
    pub fn run(self, cfg: Config) -> anyhow::Result<()> {
        let contract = cfg
            .contract
            .parse::<Name>()
            .with_context(|| format!("invalid contract name `{}`", cfg.contract))?;

        let script = fs::read_to_string(&self.script)
            .with_context(|| format!("failed to read script {}", self.script.display()))?;
        let actions: Vec<Action> = serde_json::from_str(&script)
            .with_context(|| format!("malformed script {}", self.script.display()))?;

        tracing::info!(
            contract = contract.to_string(),
            actions = actions.len(),
            "Replaying script"
        );

        let app = App::new(MemStorage::new(), LoggingGateway, SenderAuthorizer, contract);

        for outcome in replay(&app, actions) {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }

        Ok(())
    }
}

/// Apply the actions in order. A failing action is reported in its outcome
/// and doesn't stop the ones after it.
pub fn replay(
    app: &App<MemStorage, LoggingGateway, SenderAuthorizer>,
    actions: Vec<Action>,
) -> Vec<Json> {
    actions
        .into_iter()
        .enumerate()
        .map(|(index, action)| {
            let result = apply(app, action);

            match result {
                Ok(ok) => json!({ "index": index, "ok": ok }),
                Err(err) => json!({
                    "index": index,
                    "error": err.to_string(),
                    "kind": err.kind(),
                }),
            }
        })
        .collect()
}

fn apply(app: &App<MemStorage, LoggingGateway, SenderAuthorizer>, action: Action) -> AppResult<Json> {
    match action {
        Action::Execute { sender, msg } => {
            let res = app.execute(sender, msg)?;
            to_json_value(&res)
        },
        Action::Transfer {
            token_contract,
            notice,
        } => {
            let res = app.notify_transfer(token_contract, notice)?;
            to_json_value(&res)
        },
        Action::Query { msg } => app.query(msg),
    }
}

fn to_json_value(res: &Response) -> AppResult<Json> {
    serde_json::to_value(res)
        .map_err(|err| PoolError::from(StdError::serialize::<Response, _>("json", err)).into())
}

// ----------------------------------- tests -----------------------------------
