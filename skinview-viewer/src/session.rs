//! Viewer session state

use log::{debug, warn};

use skinview_binding::TagRegistry;
use skinview_core::{Bounded, Error, MaterialCatalog, Result, SceneGraph};
use skinview_framing::{frame_bounds, CameraState};

use crate::config::ViewerConfig;

/// Whether an asset is currently resident
///
/// Kept private so "not yet loaded" can never be confused with an empty
/// scene graph by callers.
#[derive(Debug)]
enum LoadState {
    NotLoaded,
    Loaded(SceneGraph),
}

/// A single viewer session: one asset slot, one material catalog, one camera
///
/// All operations run synchronously on the thread that owns the session;
/// the loader collaborator drives [`ViewerSession::on_asset_loaded`] when
/// its (possibly asynchronous) load completes, and the UI collaborator
/// drives [`ViewerSession::select_skin`]. The session holds no locks; a
/// multi-threaded host must serialize access.
#[derive(Debug)]
pub struct ViewerSession {
    config: ViewerConfig,
    catalog: MaterialCatalog,
    registry: TagRegistry,
    state: LoadState,
    camera: Option<CameraState>,
}

impl ViewerSession {
    /// Create a session with the given configuration and material catalog
    pub fn new(config: ViewerConfig, catalog: MaterialCatalog) -> Self {
        Self {
            config,
            catalog,
            registry: TagRegistry::new(),
            state: LoadState::NotLoaded,
            camera: None,
        }
    }

    /// Whether an asset has been loaded
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LoadState::Loaded(_))
    }

    /// The loaded scene graph, if any
    pub fn graph(&self) -> Option<&SceneGraph> {
        match &self.state {
            LoadState::Loaded(graph) => Some(graph),
            LoadState::NotLoaded => None,
        }
    }

    /// The current camera state; `None` until the first asset is framed
    pub fn camera(&self) -> Option<&CameraState> {
        self.camera.as_ref()
    }

    /// The session's material catalog, in presentation order
    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    /// Asset-load completion entry point
    ///
    /// Tags and binds per the configured initial material map, then frames
    /// the camera on the asset's bounding volume. Replaces any previously
    /// loaded asset along with its tag registry.
    pub fn on_asset_loaded(&mut self, mut graph: SceneGraph) {
        let mut registry = TagRegistry::new();
        let root = graph.root();

        for binding in &self.config.initial_map {
            let count = registry.tag_matching(&mut graph, root, &binding.pattern, &binding.tag);
            if count == 0 {
                warn!(
                    "initial map entry {:?} matched nothing in the loaded asset",
                    binding.pattern
                );
                continue;
            }
            match self.catalog.by_label(&binding.variant) {
                Some(variant) => {
                    registry.bind_material(
                        &mut graph,
                        &binding.tag,
                        &variant.material,
                        Some(&variant.label),
                    );
                }
                None => warn!(
                    "initial map entry {:?} names unknown variant {:?}",
                    binding.pattern, binding.variant
                ),
            }
        }

        let from = self
            .camera
            .map(|camera| camera.position)
            .unwrap_or(self.config.initial_position);
        match graph.bounding_box() {
            Some(bounds) => {
                self.camera = Some(frame_bounds(
                    from,
                    &bounds,
                    self.config.fov_y_deg,
                    &self.config.framing,
                ));
            }
            None => warn!("loaded asset has no renderable geometry to frame"),
        }

        debug!("asset loaded: {} node(s)", graph.len());
        self.registry = registry;
        self.state = LoadState::Loaded(graph);
    }

    /// User-initiated skin change
    ///
    /// Applies the catalog variant labelled `variant_label` to every node
    /// tagged `tag`. Returns the number of nodes updated; 0 means the tag
    /// matched nothing in this asset, which callers may accept (e.g. an
    /// optional decorative sub-mesh absent from a lower-detail variant).
    pub fn select_skin(&mut self, tag: &str, variant_label: &str) -> Result<usize> {
        let LoadState::Loaded(graph) = &mut self.state else {
            return Err(Error::NotLoaded);
        };
        let variant = self
            .catalog
            .by_label(variant_label)
            .ok_or_else(|| Error::UnknownVariant(variant_label.to_string()))?;
        Ok(self
            .registry
            .bind_material(graph, tag, &variant.material, Some(&variant.label)))
    }

    /// Explicit re-frame request
    ///
    /// Recomputes the asset bounds and solves the camera again from its
    /// current position. An asset with no renderable geometry has nothing
    /// to frame, so the camera is left untouched and returned as-is. The
    /// camera is otherwise left alone after load; in particular skin
    /// changes never move it.
    pub fn reframe(&mut self) -> Result<Option<CameraState>> {
        let LoadState::Loaded(graph) = &self.state else {
            return Err(Error::NotLoaded);
        };
        let Some(bounds) = graph.bounding_box() else {
            warn!("re-frame requested but the asset has no renderable geometry");
            return Ok(self.camera);
        };
        let from = self
            .camera
            .map(|camera| camera.position)
            .unwrap_or(self.config.initial_position);
        let camera = frame_bounds(from, &bounds, self.config.fov_y_deg, &self.config.framing);
        self.camera = Some(camera);
        Ok(Some(camera))
    }

    /// Display name currently carried by the first node tagged `tag`
    ///
    /// After a bind this is the applied variant's label, which makes it
    /// suitable for user-facing readback of the selected skin.
    pub fn applied_skin(&self, tag: &str) -> Option<&str> {
        let graph = self.graph()?;
        self.registry
            .nodes(tag)
            .iter()
            .map(|&id| graph.node(id))
            .find(|node| node.tag() == Some(tag))
            .map(|node| node.name.as_str())
    }
}
