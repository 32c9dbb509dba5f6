//! List store content

use anyhow::Result;

use crate::Portal;

/// List store content by type
pub fn run(portal: &Portal, content_type: &str) -> Result<()> {
    let store = portal.store();

    match content_type {
        "post" | "posts" => {
            let posts = store.list_published();
            println!("Published posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.slug
                );
            }
        }
        "slug" | "slugs" => {
            // includes drafts: this is the build-tooling view of the store
            let slugs = store.list_slugs();
            println!("Slugs ({}):", slugs.len());
            for slug in slugs {
                println!("  {}", slug);
            }
        }
        "tag" | "tags" => {
            let posts = store.list_published();
            let mut tags: std::collections::HashMap<String, usize> =
                std::collections::HashMap::new();
            for post in &posts {
                for tag in &post.tags {
                    *tags.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, slugs, tags",
                content_type
            );
        }
    }

    Ok(())
}
