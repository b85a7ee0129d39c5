//! Article command implementations

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use colored::Colorize;
use tabled::Tabled;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::{Article, ContentApi};
use crate::error::{Error, Result};
use crate::output::{json, table};

/// Article for table display
#[derive(Tabled)]
struct ArticleRow {
    #[tabled(rename = "PUBLISHED")]
    published: String,
    #[tabled(rename = "TITLE")]
    title: String,
    #[tabled(rename = "PATH")]
    path: String,
}

impl From<Article> for ArticleRow {
    fn from(article: Article) -> Self {
        Self {
            published: article.publish_date.format("%Y-%m-%d").to_string(),
            title: article.title,
            path: article.path,
        }
    }
}

/// Run the articles list command
pub async fn list(
    first: Option<usize>,
    since: Option<String>,
    opts: &GlobalOptions,
) -> Result<()> {
    let ctx = CommandContext::authenticated(opts)?;

    let articles = match since {
        Some(date) => {
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|e| Error::Other(format!("Invalid --since date '{}': {}", date, e)))?;
            let since = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
            ctx.client.articles_since(since).await?
        }
        None => {
            let first = first.unwrap_or(ctx.config.preferences.article_count);
            ctx.client.latest_articles(first).await?
        }
    };

    match ctx.format {
        OutputFormat::Pretty => {
            if articles.is_empty() {
                println!("No articles found.");
            }
            for article in &articles {
                println!(
                    "{}  {}",
                    article.publish_date.format("%Y-%m-%d").to_string().dimmed(),
                    article.title.bold()
                );
                println!("            {}", article.path.dimmed());
            }
        }
        OutputFormat::Table => {
            let rows: Vec<ArticleRow> = articles.into_iter().map(ArticleRow::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&articles)?);
        }
    }

    Ok(())
}
