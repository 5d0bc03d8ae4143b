//! Print the sidebar in rendering order.

use std::path::Path;

use anyhow::Result;
use sitenav_core::{SidebarItem, SiteConfiguration};

use super::load_site;

/// Render the sidebar as an indented outline.
pub fn render(site: &SiteConfiguration) -> String {
    let mut out = String::new();
    out.push_str(site.metadata().title());
    out.push('\n');
    for item in site.sidebar() {
        render_item(item, 1, &mut out);
    }
    out
}

fn render_item(item: &SidebarItem, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match item {
        SidebarItem::Group(group) => {
            out.push_str(&format!("{}{}/\n", indent, group.label()));
            for child in group.items() {
                render_item(child, depth + 1, out);
            }
        }
        SidebarItem::Leaf(leaf) => {
            out.push_str(&format!("{}{} -> {}\n", indent, leaf.label(), leaf.slug()));
        }
    }
}

/// Run the tree command.
pub fn run(config: &Path) -> Result<()> {
    let (site, _) = load_site(config)?;
    print!("{}", render(&site));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitenav_core::SiteBuilder;

    #[test]
    fn renders_outline_in_order() {
        let site = SiteBuilder::new("Docs")
            .group("Getting Started", |g| {
                g.leaf("Introduction", "introduction")
                    .group("More", |g| g.leaf("Installation", "installation"))
            })
            .leaf("About", "about")
            .build()
            .unwrap();

        assert_eq!(
            render(&site),
            "Docs\n  Getting Started/\n    Introduction -> introduction\n    More/\n      Installation -> installation\n  About -> about\n"
        );
    }
}
