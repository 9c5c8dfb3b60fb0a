/*
[INPUT]:  Parsed subcommand and a configured ListmonkClient
[OUTPUT]: JSON value to print for the subcommand
[POS]:    Command layer - maps CLI subcommands onto client calls
[UPDATE]: When adding subcommands
*/

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use listmonk_adapter::{
    ImportParams, ListQuery, ListRequest, ListmonkClient, Method, SubscriberQuery,
    SubscriberRequest, TransactionalRequest,
};
use serde_json::{Value, json};
use tracing::info;

use crate::cli::{
    CampaignCommand, Command, ImportCommand, ListCommand, MediaCommand, SubscriberCommand,
    TxCommand,
};

/// Run one subcommand against the server.
///
/// Campaign previews come back as `Value::String` holding the raw HTML.
pub async fn execute(client: &ListmonkClient, command: Command) -> Result<Value> {
    match command {
        Command::Health => {
            let healthy = client.health_check().await.context("health check")?;
            Ok(json!({ "healthy": healthy }))
        }
        Command::Subscribers(command) => subscribers(client, command).await,
        Command::Lists(command) => lists(client, command).await,
        Command::Campaigns(command) => campaigns(client, command).await,
        Command::Tx(command) => tx(client, command).await,
        Command::Media(command) => media(client, command).await,
        Command::Import(command) => import(client, command).await,
        Command::Request {
            method,
            endpoint,
            data,
        } => request(client, &method, &endpoint, data.as_deref()).await,
        Command::Init { .. } => bail!("init runs locally and does not talk to the server"),
    }
}

async fn subscribers(client: &ListmonkClient, command: SubscriberCommand) -> Result<Value> {
    match command {
        SubscriberCommand::List {
            query,
            list_id,
            page,
            per_page,
        } => {
            let filters = SubscriberQuery {
                query,
                list_id,
                page,
                per_page,
                ..SubscriberQuery::default()
            };
            let subscribers = client.get_subscribers(&filters).await.context("list subscribers")?;
            Ok(serde_json::to_value(subscribers)?)
        }
        SubscriberCommand::Get { id } => {
            let subscriber = client
                .get_subscriber(id)
                .await
                .context("get subscriber")?
                .ok_or_else(|| anyhow!("subscriber {id} not found"))?;
            Ok(serde_json::to_value(subscriber)?)
        }
        SubscriberCommand::Create {
            email,
            name,
            lists,
            status,
            preconfirm,
        } => {
            let mut request = SubscriberRequest::new(email)
                .name(name)
                .status(status.into())
                .lists(lists);
            if preconfirm {
                request = request.preconfirm_subscriptions(true);
            }
            let subscriber = client
                .create_subscriber(&request)
                .await
                .context("create subscriber")?;
            info!(id = ?subscriber.id().ok(), "subscriber created");
            Ok(serde_json::to_value(subscriber)?)
        }
        SubscriberCommand::Delete { ids } => {
            let deleted = match ids.as_slice() {
                [id] => client.delete_subscriber(*id).await,
                many => client.delete_subscribers(many).await,
            }
            .context("delete subscribers")?;
            Ok(json!({ "deleted": deleted }))
        }
        SubscriberCommand::Blocklist { ids } => {
            let blocklisted = match ids.as_slice() {
                [id] => client.blocklist_subscriber(*id).await,
                many => client.blocklist_subscribers(many).await,
            }
            .context("blocklist subscribers")?;
            Ok(json!({ "blocklisted": blocklisted }))
        }
    }
}

async fn lists(client: &ListmonkClient, command: ListCommand) -> Result<Value> {
    match command {
        ListCommand::List {
            query,
            tag,
            page,
            per_page,
        } => {
            let filters = ListQuery {
                query,
                tag,
                page,
                per_page,
                ..ListQuery::default()
            };
            let lists = client.get_lists(&filters).await.context("list lists")?;
            Ok(serde_json::to_value(lists)?)
        }
        ListCommand::Get { id } => {
            let list = client
                .get_list(id)
                .await
                .context("get list")?
                .ok_or_else(|| anyhow!("list {id} not found"))?;
            Ok(serde_json::to_value(list)?)
        }
        ListCommand::Create {
            name,
            list_type,
            optin,
            description,
            tags,
        } => {
            let mut request = ListRequest::new(name)
                .list_type(list_type.into())
                .optin(optin.into());
            if let Some(description) = description {
                request = request.description(description);
            }
            if !tags.is_empty() {
                request = request.tags_array(tags);
            }
            let list = client
                .create_list(&request)
                .await
                .context("create list")?
                .ok_or_else(|| anyhow!("server rejected the list"))?;
            Ok(serde_json::to_value(list)?)
        }
        ListCommand::Delete { id } => {
            let deleted = client.delete_list(id).await.context("delete list")?;
            Ok(json!({ "deleted": deleted }))
        }
    }
}

async fn campaigns(client: &ListmonkClient, command: CampaignCommand) -> Result<Value> {
    match command {
        CampaignCommand::Send { id, later } => {
            let updated = client
                .send_campaign(id, !later)
                .await
                .context("update campaign status")?;
            Ok(json!({ "updated": updated }))
        }
        CampaignCommand::Preview { id } => {
            let html = client
                .get_campaign_preview(id)
                .await
                .context("preview campaign")?;
            Ok(Value::String(html))
        }
    }
}

async fn tx(client: &ListmonkClient, command: TxCommand) -> Result<Value> {
    let TxCommand::Send {
        to,
        subject,
        body,
        template_id,
        from,
        content_type,
    } = command;

    let mut message = TransactionalRequest::new(to, subject, body)
        .template_id(template_id)
        .content_type(content_type.into());
    if let Some(from) = from {
        message = message.sender(from, None);
    }
    let sent = client
        .send_transactional_email(&message)
        .await
        .context("send transactional message")?;
    Ok(json!({ "sent": sent }))
}

async fn media(client: &ListmonkClient, command: MediaCommand) -> Result<Value> {
    let MediaCommand::Upload { path } = command;
    let (bytes, filename) = read_upload(&path).await?;
    client
        .upload_media(bytes, &filename)
        .await
        .context("upload media")?
        .ok_or_else(|| anyhow!("server rejected the upload"))
}

async fn import(client: &ListmonkClient, command: ImportCommand) -> Result<Value> {
    let ImportCommand::Subscribers {
        path,
        lists,
        mode,
        delim,
        overwrite,
    } = command;

    let params = ImportParams {
        mode: mode.as_str().to_string(),
        delim,
        lists,
        overwrite,
        ..ImportParams::default()
    };
    let (bytes, filename) = read_upload(&path).await?;
    client
        .import_subscribers(bytes, &filename, &params)
        .await
        .context("import subscribers")
}

async fn request(
    client: &ListmonkClient,
    method: &str,
    endpoint: &str,
    data: Option<&str>,
) -> Result<Value> {
    let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .with_context(|| format!("invalid HTTP method {method:?}"))?;
    let data = match data {
        Some(raw) => serde_json::from_str(raw).context("--data must be JSON")?,
        None => json!({}),
    };

    let reply = client
        .request(method, endpoint, &data)
        .await
        .context("send request")?;
    if !reply.is_success() {
        bail!("server answered {}: {}", reply.status, reply.text);
    }
    Ok(match reply.body {
        Value::Null => Value::String(reply.text),
        body => body,
    })
}

async fn read_upload(path: &Path) -> Result<(Vec<u8>, String)> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))?
        .to_string();
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    Ok((bytes, filename))
}
