//! End-to-end loading over directories and archives.
//!
//! Builds a classpath-like layout of bundled jars and loose override
//! directories, loads a shared resource name through [`SearchPath`], and checks
//! the resulting models and their layering order.

use anyhow::{Result, anyhow, ensure};
use resource_config::{
    ConfigLoader, ConfigModel, ErrorKind, ExtensionFormat, ResourceLocation, SearchPath,
};
use rstest::{fixture, rstest};
use serde_json::json;
use test_helpers::{ResourceTree, env as test_env};

const NAME: &str = "microservice.toml";

struct Layout {
    tree: ResourceTree,
    search_path: SearchPath,
}

#[fixture]
fn layout() -> Result<Layout> {
    let tree = ResourceTree::new()?;
    tree.write_file(
        "conf/microservice.toml",
        "config-order = 10\n[service]\nport = 9090\n",
    )?;
    tree.write_archive(
        "lib/core.jar",
        [(NAME, "config-order = 0\n[service]\nname = \"core\"\nport = 8080\n")],
    )?;
    tree.write_archive("lib/plugin.jar", [(NAME, "# placeholder only\n")])?;
    tree.write_archive(
        "lib/transport.jar",
        [(NAME, "config-order = \"-5\"\n[transport]\nkind = \"rest\"\n")],
    )?;
    tree.write_file("overrides/microservice.toml", "[service]\nport = 7070\n")?;
    let search_path = SearchPath::builder()
        .add_root(tree.path("conf"))
        .add_root(tree.path("lib/core.jar"))
        .add_root(tree.path("lib/plugin.jar"))
        .add_root(tree.path("overrides"))
        .add_root(tree.path("lib/transport.jar"))
        .build();
    Ok(Layout { tree, search_path })
}

fn locations(models: &[ConfigModel]) -> Vec<ResourceLocation> {
    models.iter().map(|model| model.location().clone()).collect()
}

#[rstest]
fn loads_in_discovery_order(layout: Result<Layout>) -> Result<()> {
    let Layout { tree, search_path } = layout?;
    let mut loader = ConfigLoader::new(search_path, ExtensionFormat);
    loader.load(NAME).map_err(|err| anyhow!("{err}"))?;
    let expected = vec![
        ResourceLocation::file(tree.path("conf/microservice.toml")),
        ResourceLocation::archive(tree.path("lib/core.jar"), NAME),
        ResourceLocation::archive(tree.path("lib/plugin.jar"), NAME),
        ResourceLocation::file(tree.path("overrides/microservice.toml")),
        ResourceLocation::archive(tree.path("lib/transport.jar"), NAME),
    ];
    ensure!(locations(loader.models()) == expected, "discovery order changed");
    let orders: Vec<i32> = loader.models().iter().map(ConfigModel::order).collect();
    ensure!(orders == [10, 0, 0, 0, -5], "unexpected orders {orders:?}");
    Ok(())
}

#[rstest]
fn sorts_bundled_defaults_before_loose_overrides(layout: Result<Layout>) -> Result<()> {
    let Layout { tree, search_path } = layout?;
    let mut loader = ConfigLoader::new(search_path, ExtensionFormat);
    loader.load(NAME).map_err(|err| anyhow!("{err}"))?;
    loader.sort();
    let expected = vec![
        ResourceLocation::archive(tree.path("lib/transport.jar"), NAME),
        ResourceLocation::archive(tree.path("lib/core.jar"), NAME),
        ResourceLocation::archive(tree.path("lib/plugin.jar"), NAME),
        ResourceLocation::file(tree.path("overrides/microservice.toml")),
        ResourceLocation::file(tree.path("conf/microservice.toml")),
    ];
    let sorted = loader.into_models();
    ensure!(locations(&sorted) == expected, "unexpected order {:?}", locations(&sorted));

    // Merging front to back lets later models override earlier ones.
    let port = sorted
        .iter()
        .rev()
        .find_map(|model| model.config().get("service")?.get("port").cloned());
    ensure!(port == Some(json!(9090)), "unexpected effective port {port:?}");
    Ok(())
}

#[rstest]
fn placeholder_resources_load_as_empty_mappings(layout: Result<Layout>) -> Result<()> {
    let Layout { tree, search_path } = layout?;
    let loader = ConfigLoader::new(search_path, ExtensionFormat);
    let model = loader
        .load_location(ResourceLocation::archive(tree.path("lib/plugin.jar"), NAME))
        .map_err(|err| anyhow!("{err}"))?;
    ensure!(model.config().is_empty(), "expected an empty mapping");
    ensure!(model.order() == 0, "expected the default order");
    Ok(())
}

#[rstest]
fn malformed_order_in_an_archive_aborts_the_load() -> Result<()> {
    let tree = ResourceTree::new()?;
    tree.write_file("conf/microservice.toml", "config-order = 1")?;
    tree.write_archive("lib/bad.jar", [(NAME, "config-order = \"soon\"")])?;
    tree.write_file("late/microservice.toml", "config-order = 2")?;
    let search_path = SearchPath::builder()
        .roots([tree.path("conf"), tree.path("lib/bad.jar"), tree.path("late")])
        .build();
    let mut loader = ConfigLoader::new(search_path, ExtensionFormat);
    let Err(err) = loader.load(NAME) else {
        return Err(anyhow!("expected the malformed order to fail"));
    };
    ensure!(err.kind() == ErrorKind::Parse, "unexpected kind: {err}");
    ensure!(
        err.location() == Some(&ResourceLocation::archive(tree.path("lib/bad.jar"), NAME)),
        "error should name the archive entry: {err}"
    );
    ensure!(
        locations(loader.models()) == [ResourceLocation::file(tree.path("conf/microservice.toml"))],
        "models loaded before the failure must remain"
    );
    Ok(())
}

#[rstest]
fn env_var_roots_take_part_in_loading() -> Result<()> {
    const VAR: &str = "RESOURCE_CONFIG_IT_SEARCH_PATH";
    let tree = ResourceTree::new()?;
    tree.write_file("conf/microservice.toml", "config-order = 1")?;
    tree.write_archive("lib/extra.jar", [(NAME, "config-order = 3")])?;
    let joined = std::env::join_paths([tree.path("lib/extra.jar")])?;
    let _lock = test_env::lock();
    let _guard = test_env::set_var(VAR, joined);
    let search_path = SearchPath::builder()
        .add_root(tree.path("conf"))
        .env_var(VAR)
        .build();
    let mut loader = ConfigLoader::new(search_path, ExtensionFormat).with_order_key("config-order");
    loader.load(NAME).map_err(|err| anyhow!("{err}"))?;
    loader.sort();
    let orders: Vec<i32> = loader.models().iter().map(ConfigModel::order).collect();
    ensure!(orders == [3, 1], "unexpected orders {orders:?}");
    Ok(())
}

#[rstest]
fn models_serialise_for_diagnostics() -> Result<()> {
    let tree = ResourceTree::new()?;
    tree.write_archive("lib/core.jar", [(NAME, "config-order = 4\nname = \"core\"")])?;
    let search_path = SearchPath::builder().add_root(tree.path("lib/core.jar")).build();
    let mut loader = ConfigLoader::new(search_path, ExtensionFormat);
    loader.load(NAME).map_err(|err| anyhow!("{err}"))?;
    let dumped = serde_json::to_value(loader.models())?;
    let expected = json!([{
        "location": {
            "kind": "archive",
            "archive": tree.path("lib/core.jar").as_str(),
            "entry": NAME,
        },
        "config": {"config-order": 4, "name": "core"},
        "order": 4,
    }]);
    ensure!(dumped == expected, "unexpected dump {dumped}");
    Ok(())
}
