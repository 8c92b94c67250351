//! Linked Views Example
//!
//! Demonstrates linkview with two star catalogs and three console viewers.
//! Selections made on one dataset propagate to every viewer, and a
//! translator carries them across catalogs.

use linkview_core::{
    Dataset, Selection, Subset, SubsetStyle, SubsetUpdate, TreeSelection, Value, ValueMap,
};
use linkview_hub::{shared, Client, Hub, Translate};

/// A stand-in for a plot or table widget: prints what it would repaint
struct ConsoleViewer {
    name: &'static str,
    data: Dataset,
}

impl Client for ConsoleViewer {
    fn data(&self) -> Dataset {
        self.data.clone()
    }

    fn update_subset(&mut self, subset: &Subset, update: SubsetUpdate) {
        // Every client hears every update; showing or ignoring foreign
        // datasets is each client's own call.
        match subset.data() {
            Some(data) if data == self.data => {
                println!("  [{}] {}: \"{}\"", self.name, update, subset.label());
            }
            _ => {
                println!("  [{}] ({} on a foreign dataset, ignored)", self.name, update);
            }
        }
    }
}

/// Carries a tree selection to the other catalog by shifting node ids
struct CrossMatch;

impl Translate for CrossMatch {
    fn translate(&self, subset: &Subset, target: &Dataset, params: &ValueMap) -> Option<Subset> {
        if subset.data().as_ref() == Some(target) {
            return None;
        }
        let tree = match subset.selection() {
            Selection::Tree(tree) => tree,
            Selection::Pixel(_) => return None,
        };
        // Pretend the catalogs are row-aligned up to an id offset; a real
        // matcher would consult a crossmatch table here. Offsets outside
        // the id range read as 0.
        let offset = params
            .get("offset")
            .and_then(Value::as_int)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0);
        let shifted = TreeSelection::from_nodes(tree.iter().map(|id| id.saturating_add(offset)));
        Some(Subset::with_label(
            target,
            format!("{} (matched)", subset.label()),
            shifted.into(),
        ))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,linkview_hub=debug".into()),
        )
        .init();

    println!("=== Linkview Linked Views Example ===\n");

    let hub = Hub::new();
    let stars = Dataset::new("stars");
    let galaxies = Dataset::new("galaxies");

    let sky_plot = shared(ConsoleViewer {
        name: "sky plot",
        data: stars.clone(),
    });
    let star_table = shared(ConsoleViewer {
        name: "star table",
        data: stars.clone(),
    });
    let galaxy_plot = shared(ConsoleViewer {
        name: "galaxy plot",
        data: galaxies.clone(),
    });

    hub.add_client(sky_plot).unwrap();
    hub.add_client(star_table.clone()).unwrap();
    hub.add_client(galaxy_plot).unwrap();
    println!("Registered {} clients\n", hub.client_count());

    println!("Selecting bright stars:");
    let bright = stars.create_subset(Selection::Tree(TreeSelection::from_nodes([1, 2, 8])));

    println!("\nRestyling the selection:");
    bright.set_style(SubsetStyle::with_color("#1f78b4"));

    println!("\nRefining quietly (broadcasting off):");
    bright.set_broadcasting(false);
    let mut refined = bright.selection();
    if let Some(tree) = refined.as_tree_mut() {
        tree.insert(13);
        tree.remove(2);
    }
    bright.set_selection(refined);
    bright.set_broadcasting(true);
    println!("  (no viewer repainted)");

    println!("\nRenaming with broadcasting back on:");
    bright.set_label("bright stars");

    println!("\nTranslating across catalogs:");
    hub.set_translator(CrossMatch);
    let mut params = ValueMap::new();
    params.insert("offset".to_string(), Value::Int(100));
    let attached = hub.translate_subset_with(&bright, &params);
    println!(
        "  attached {} translated subset(s); galaxies now has {}",
        attached,
        galaxies.subset_count()
    );

    println!("\nDetaching the star table:");
    hub.remove_client(&star_table).unwrap();
    println!("  {} clients remain", hub.client_count());

    println!("\nRenaming again (star table stays quiet):");
    bright.set_label("bright nearby stars");

    println!("\nDeleting the selection:");
    bright.delete();
    println!("  stars now has {} subset(s)", stars.subset_count());

    println!("\n=== Done ===");
}
