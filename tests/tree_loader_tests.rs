use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chart_showcase::api::{
    AssetFetcher, DEFAULT_TREE_ASSET_PATH, FsAssetFetcher, SeriesKind,
    TREE_ANIMATION_DURATION_MS, TREE_ANIMATION_DURATION_UPDATE_MS, TooltipTrigger,
    TreeDataLoader,
};
use chart_showcase::core::TreeNode;
use chart_showcase::{ChartError, ChartOption, ChartResult};
use futures::StreamExt;
use serde_json::{Value, json};

struct StaticFetcher {
    document: Value,
    calls: AtomicUsize,
}

impl StaticFetcher {
    fn new(document: Value) -> Arc<Self> {
        Arc::new(Self {
            document,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetFetcher for StaticFetcher {
    async fn get_json(&self, _path: &str) -> ChartResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.document.clone())
    }
}

struct FailingFetcher;

#[async_trait]
impl AssetFetcher for FailingFetcher {
    async fn get_json(&self, path: &str) -> ChartResult<Value> {
        Err(ChartError::AssetFetch {
            path: path.to_owned(),
            reason: "connection refused".to_owned(),
        })
    }
}

fn tree_root(option: &ChartOption) -> &TreeNode {
    let roots = option.series[0].data.as_tree().expect("tree series data");
    assert_eq!(roots.len(), 1);
    &roots[0]
}

async fn load_single(loader: &TreeDataLoader) -> ChartOption {
    let mut stream = loader.load();
    let option = stream
        .next()
        .await
        .expect("one item")
        .expect("tree option");
    assert!(stream.next().await.is_none());
    option
}

#[tokio::test]
async fn even_children_are_collapsed() {
    let fetcher = StaticFetcher::new(json!({
        "name": "root",
        "children": [
            { "name": "A" },
            { "name": "B" },
            { "name": "C" },
            { "name": "D" }
        ]
    }));
    let loader = TreeDataLoader::new(fetcher.clone(), "data.json");
    let option = load_single(&loader).await;

    let root = tree_root(&option);
    assert!(root.collapsed.is_none());
    let children = root.children.as_ref().expect("children");
    let flags: Vec<Option<bool>> = children.iter().map(|child| child.collapsed).collect();
    assert_eq!(flags, vec![Some(true), None, Some(true), None]);
}

#[tokio::test]
async fn collapsed_flag_serializes_only_where_set() {
    let fetcher = StaticFetcher::new(json!({
        "name": "root",
        "children": [{ "name": "A" }, { "name": "B", "value": 3 }]
    }));
    let option = load_single(&TreeDataLoader::new(fetcher, "data.json")).await;
    let json = option.to_json_value().expect("json");

    let root = &json["series"][0]["data"][0];
    assert!(root.get("collapsed").is_none());
    assert_eq!(root["children"][0]["collapsed"], json!(true));
    assert!(root["children"][1].get("collapsed").is_none());
    assert_eq!(root["children"][1]["value"], json!(3));
}

#[tokio::test]
async fn node_values_keep_their_original_encoding() {
    let fetcher = StaticFetcher::new(json!({
        "name": "root",
        "value": 10,
        "children": [
            { "name": "int", "value": 3 },
            { "name": "array", "value": [1, 2] },
            { "name": "string", "value": "12" },
            { "name": "float", "value": 2.5, "itemStyle": { "color": "red" } }
        ]
    }));
    let option = load_single(&TreeDataLoader::new(fetcher, "data.json")).await;
    let json = option.to_json_value().expect("json");
    let root = &json["series"][0]["data"][0];

    let encoded = |node: &Value| serde_json::to_string(&node["value"]).expect("encode value");
    assert_eq!(encoded(root), "10");
    assert_eq!(encoded(&root["children"][0]), "3");
    assert_eq!(encoded(&root["children"][1]), "[1,2]");
    assert_eq!(encoded(&root["children"][2]), "\"12\"");
    assert_eq!(encoded(&root["children"][3]), "2.5");
    assert_eq!(root["children"][3]["itemStyle"], json!({ "color": "red" }));
}

#[tokio::test]
async fn empty_and_missing_children_are_accepted() {
    for document in [json!({ "name": "root", "children": [] }), json!({ "name": "root" })] {
        let option = load_single(&TreeDataLoader::new(StaticFetcher::new(document), "x")).await;
        let root = tree_root(&option);
        assert_eq!(root.child_count(), 0);
        assert!(root.collapsed.is_none());
    }
}

#[tokio::test]
async fn tree_template_fields_are_fixed() {
    let option = load_single(&TreeDataLoader::new(
        StaticFetcher::new(json!({ "name": "root", "children": [] })),
        "x",
    ))
    .await;

    let tooltip = option.tooltip.as_ref().expect("tooltip");
    assert_eq!(tooltip.trigger, Some(TooltipTrigger::Item));
    assert_eq!(tooltip.trigger_on.as_deref(), Some("mousemove"));

    let series = &option.series[0];
    assert_eq!(series.kind, SeriesKind::Tree);
    assert_eq!(series.expand_and_collapse, Some(true));
    assert_eq!(series.animation_duration, Some(TREE_ANIMATION_DURATION_MS));
    assert_eq!(
        series.animation_duration_update,
        Some(TREE_ANIMATION_DURATION_UPDATE_MS)
    );
    assert_eq!(series.symbol_size, Some(7.0));
    assert_eq!(series.left.as_deref(), Some("7%"));
    assert_eq!(series.right.as_deref(), Some("20%"));

    let json = option.to_json_value().expect("json");
    assert_eq!(json["series"][0]["label"]["align"], json!("right"));
    assert_eq!(json["series"][0]["label"]["fontSize"], json!(9));
    assert_eq!(json["series"][0]["leaves"]["label"]["position"], json!("right"));
    assert_eq!(json["series"][0]["animationDurationUpdate"], json!(750));
}

#[tokio::test]
async fn stream_is_lazy_and_single_shot() {
    let fetcher = StaticFetcher::new(json!({ "name": "root", "children": [{ "name": "A" }] }));
    let loader = TreeDataLoader::new(fetcher.clone(), "data.json");

    let mut stream = loader.load();
    assert_eq!(fetcher.calls(), 0);

    assert!(stream.next().await.is_some());
    assert!(stream.next().await.is_none());
    assert!(stream.next().await.is_none());
    assert_eq!(fetcher.calls(), 1);

    let _ = load_single(&loader).await;
    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test]
async fn fetch_failure_surfaces_as_stream_error() {
    let loader = TreeDataLoader::new(Arc::new(FailingFetcher), "assets/data/flare.json");
    let mut stream = loader.load();

    let err = stream
        .next()
        .await
        .expect("one item")
        .expect_err("fetch should fail");
    assert!(matches!(err, ChartError::AssetFetch { ref path, .. } if path == "assets/data/flare.json"));
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn malformed_documents_are_rejected() {
    for document in [
        json!([1, 2, 3]),
        json!({ "name": "root", "children": "nope" }),
        json!({ "children": [] }),
    ] {
        let loader = TreeDataLoader::new(StaticFetcher::new(document), "x");
        let err = loader
            .load()
            .next()
            .await
            .expect("one item")
            .expect_err("malformed document");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}

#[tokio::test]
async fn bundled_flare_asset_loads_from_disk() {
    let fetcher = Arc::new(FsAssetFetcher::new(PathBuf::from(env!("CARGO_MANIFEST_DIR"))));
    let option = load_single(&TreeDataLoader::new(fetcher, DEFAULT_TREE_ASSET_PATH)).await;

    let root = tree_root(&option);
    assert_eq!(root.name, "flare");
    for (idx, child) in root.children.as_ref().expect("children").iter().enumerate() {
        assert_eq!(child.is_collapsed(), idx % 2 == 0, "child {idx}");
        if let Some(grandchildren) = &child.children {
            assert!(grandchildren.iter().all(|node| node.collapsed.is_none()));
        }
    }
}

#[tokio::test]
async fn missing_file_is_a_fetch_error() {
    let fetcher = Arc::new(FsAssetFetcher::new(PathBuf::from(env!("CARGO_MANIFEST_DIR"))));
    let loader = TreeDataLoader::new(fetcher, "assets/data/does-not-exist.json");
    let err = loader
        .load()
        .next()
        .await
        .expect("one item")
        .expect_err("missing file");
    assert!(matches!(err, ChartError::AssetFetch { .. }));
}
