//! Site content and image library commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use decibel_commerce::content::{ContentCategory, SectionUpdate};
use decibel_commerce::CategoryId;

use crate::context::Context;

#[derive(Args)]
pub struct ContentArgs {
    #[command(subcommand)]
    pub command: ContentCommand,
}

#[derive(Subcommand)]
pub enum ContentCommand {
    /// Show the current site content
    Show,

    /// Edit the hero section (unset flags keep current values)
    SetHero {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        subtitle: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        button_text: Option<String>,
        #[arg(long)]
        background_image: Option<String>,
    },

    /// Edit the about section (unset flags keep current values)
    SetAbout {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },

    /// Add a category tile
    AddCategory {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        image: String,
        /// Defaults to /category/<id>
        #[arg(long)]
        href: Option<String>,
    },

    /// Update a category tile (unset flags keep current values)
    UpdateCategory {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        href: Option<String>,
    },

    /// Remove a category tile
    RemoveCategory { id: String },

    /// List uploaded images
    Images,

    /// Record an uploaded image
    AddImage {
        name: String,
        #[arg(long)]
        url: String,
    },

    /// Remove an uploaded image by id
    RemoveImage { id: i64 },
}

/// Run the content command.
pub fn run(args: ContentArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ContentCommand::Show => show(ctx),
        ContentCommand::SetHero {
            title,
            subtitle,
            description,
            button_text,
            background_image,
        } => {
            let mut store = ctx.content_store();
            let mut hero = store.content().hero.clone();
            if let Some(title) = title {
                hero.title = title;
            }
            if let Some(subtitle) = subtitle {
                hero.subtitle = subtitle;
            }
            if let Some(description) = description {
                hero.description = description;
            }
            if let Some(button_text) = button_text {
                hero.button_text = button_text;
            }
            if let Some(background_image) = background_image {
                hero.background_image = background_image;
            }
            store.update_section(SectionUpdate::Hero(hero));
            Ok(())
        }
        ContentCommand::SetAbout {
            title,
            description,
            image,
        } => {
            let mut store = ctx.content_store();
            let mut about = store.content().about.clone();
            if let Some(title) = title {
                about.title = title;
            }
            if let Some(description) = description {
                about.description = description;
            }
            if let Some(image) = image {
                about.image = image;
            }
            store.update_section(SectionUpdate::About(about));
            Ok(())
        }
        ContentCommand::AddCategory {
            id,
            name,
            image,
            href,
        } => {
            let mut store = ctx.content_store();
            let href = href.unwrap_or_else(|| format!("/category/{id}"));
            store.add_category(ContentCategory {
                id: CategoryId::new(id),
                name,
                image,
                href,
            })?;
            Ok(())
        }
        ContentCommand::UpdateCategory {
            id,
            name,
            image,
            href,
        } => {
            let mut store = ctx.content_store();
            let id = CategoryId::new(id);
            let Some(existing) = store
                .content()
                .categories
                .iter()
                .find(|c| c.id == id)
                .cloned()
            else {
                ctx.output
                    .info(&format!("No category {:?}; nothing to do.", id.as_str()));
                return Ok(());
            };

            let mut edited = existing;
            if let Some(name) = name {
                edited.name = name;
            }
            if let Some(image) = image {
                edited.image = image;
            }
            if let Some(href) = href {
                edited.href = href;
            }
            store.update_category(edited);
            Ok(())
        }
        ContentCommand::RemoveCategory { id } => {
            let mut store = ctx.content_store();
            if !store.delete_category(&CategoryId::new(id.clone())) {
                ctx.output
                    .info(&format!("No category {id:?}; nothing to do."));
            }
            Ok(())
        }
        ContentCommand::Images => images(ctx),
        ContentCommand::AddImage { name, url } => {
            let mut store = ctx.content_store();
            let id = store.add_image(url, name);
            ctx.output.success(&format!("Image recorded with id {id}."));
            Ok(())
        }
        ContentCommand::RemoveImage { id } => {
            let mut store = ctx.content_store();
            if store.remove_image(id) {
                ctx.output.success("Image removed.");
            } else {
                ctx.output.info(&format!("No image with id {id}; nothing to do."));
            }
            Ok(())
        }
    }
}

fn show(ctx: &Context) -> Result<()> {
    let store = ctx.content_store();
    let content = store.content();

    ctx.output.header("Hero");
    ctx.output.kv("title", &content.hero.title);
    ctx.output.kv("subtitle", &content.hero.subtitle);
    ctx.output.kv("button", &content.hero.button_text);
    println!("{}", content.hero.description);

    ctx.output.blank();
    ctx.output.header("About");
    ctx.output.kv("title", &content.about.title);
    println!("{}", content.about.description);

    ctx.output.blank();
    ctx.output.header("Categories");
    for category in &content.categories {
        println!("  {:<12} {:<14} {}", category.id, category.name, category.href);
    }

    ctx.output.blank();
    ctx.output.header("Featured products");
    for featured in &content.featured_products {
        let marker = if featured.featured { "*" } else { " " };
        println!("  {marker} {:<24} {}", featured.name, featured.link);
    }
    Ok(())
}

fn images(ctx: &Context) -> Result<()> {
    let store = ctx.content_store();
    if store.images().is_empty() {
        ctx.output.info("No uploaded images.");
        return Ok(());
    }

    ctx.output.header("Uploaded images");
    for image in store.images() {
        let preview: String = image.url.chars().take(40).collect();
        println!("  {:>3}  {:<24} {preview}", image.id, image.name);
    }
    Ok(())
}
