//! Resolution of the native library: override tier, then bundled tier.
//!
//! ```text
//! load()
//!   ├─ already loaded? ──────────────► return recorded source (no I/O)
//!   ├─ override / search path ── ok ─► Loaded
//!   │        └─ err (recoverable, logged)
//!   └─ extract bundled library ─ load ► Loaded | LoadError
//! ```
//!
//! The whole sequence runs under one mutex, so concurrent callers in the same
//! process never load or extract twice.

mod extract;
mod overrides;

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use systemhook_core::{
    BASE_NAME, HostEnvironment, LibraryNaming, LinkError, LoadResult, LoaderConfig, NativeLoader,
    PlatformId, ResourceDescriptor, ResourceProvider,
};
use tracing::{debug, info};

use crate::loader::DynamicLoader;
use crate::resources::{DirectoryResources, default_resource_root};

pub use extract::ExtractedArtifact;

/// Where the native library was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Found by file name through the platform library search path.
    SearchPath { name: String },
    /// Loaded from the operator-supplied directory.
    Override { path: PathBuf },
    /// Extracted from the bundled resources.
    Bundled { path: PathBuf },
}

impl fmt::Display for LoadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SearchPath { name } => write!(f, "search path ({name})"),
            Self::Override { path } => write!(f, "override ({})", path.display()),
            Self::Bundled { path } => write!(f, "bundled ({})", path.display()),
        }
    }
}

/// Outcome of a tier that is allowed to fail softly.
pub(crate) enum TierOutcome {
    Loaded(LoadSource),
    /// Fall through to the next tier.
    Recoverable(LinkError),
}

/// Process-wide load flag. Set once, never reset.
#[derive(Debug, Default)]
struct LoadState {
    source: Option<LoadSource>,
}

impl LoadState {
    const fn loaded(&self) -> bool {
        self.source.is_some()
    }
}

/// Resolves, extracts and loads the `systemhook` native library at most once.
pub struct LibraryResolver {
    host: HostEnvironment,
    naming: LibraryNaming,
    resources: Arc<dyn ResourceProvider>,
    loader: Arc<dyn NativeLoader>,
    state: Mutex<LoadState>,
}

impl LibraryResolver {
    /// Create a resolver for the detected host environment.
    pub fn new(resources: Arc<dyn ResourceProvider>, loader: Arc<dyn NativeLoader>) -> Self {
        Self {
            host: HostEnvironment::detect(),
            naming: LibraryNaming::host(),
            resources,
            loader,
            state: Mutex::new(LoadState::default()),
        }
    }

    /// Resolver reading bundled libraries from [`default_resource_root`] and
    /// loading them with the platform dynamic linker.
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(DirectoryResources::new(default_resource_root())),
            Arc::new(DynamicLoader::new()),
        )
    }

    #[must_use]
    pub fn with_host(mut self, host: HostEnvironment) -> Self {
        self.host = host;
        self
    }

    #[must_use]
    pub fn with_naming(mut self, naming: LibraryNaming) -> Self {
        self.naming = naming;
        self
    }

    pub const fn host(&self) -> &HostEnvironment {
        &self.host
    }

    pub const fn naming(&self) -> LibraryNaming {
        self.naming
    }

    pub fn platform_id(&self) -> PlatformId {
        self.host.platform_id()
    }

    /// The bundled artifact this host falls back to.
    pub fn descriptor(&self) -> ResourceDescriptor {
        ResourceDescriptor::new(BASE_NAME, self.platform_id(), self.naming)
    }

    pub fn is_loaded(&self) -> bool {
        self.lock_state().loaded()
    }

    /// Source of the successful load, if any.
    pub fn loaded_source(&self) -> Option<LoadSource> {
        self.lock_state().source.clone()
    }

    /// Make the native library available to this process.
    ///
    /// The first successful call performs the resolution; later calls return
    /// the recorded source without touching the filesystem. A failed call
    /// leaves the resolver unloaded, so the next call starts over.
    pub fn load(&self, config: &LoaderConfig) -> LoadResult<LoadSource> {
        let mut state = self.lock_state();
        if let Some(source) = &state.source {
            return Ok(source.clone());
        }

        let source = match overrides::try_override(self.loader.as_ref(), config, self.naming) {
            TierOutcome::Loaded(source) => source,
            TierOutcome::Recoverable(err) => {
                debug!(error = %err, "Override not loadable, falling back to bundled library");
                self.extract_and_load(config)?
            }
        };

        info!(%source, platform = %self.platform_id(), "Loaded native library");
        state.source = Some(source.clone());
        Ok(source)
    }

    /// Extract the bundled library without loading it.
    ///
    /// Does not consult the override tier and does not change the load state.
    pub fn extract(&self, config: &LoaderConfig) -> LoadResult<ExtractedArtifact> {
        extract::extract(
            self.resources.as_ref(),
            &self.descriptor(),
            &config.extract_dir(),
        )
    }

    fn extract_and_load(&self, config: &LoaderConfig) -> LoadResult<LoadSource> {
        let artifact = self.extract(config)?;
        self.loader.load_path(&artifact.path)?;
        Ok(LoadSource::Bundled {
            path: artifact.path,
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, LoadState> {
        // The state is a single assignment, so a panic elsewhere cannot leave
        // it half-written.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for LibraryResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibraryResolver")
            .field("host", &self.host)
            .field("naming", &self.naming)
            .finish_non_exhaustive()
    }
}
