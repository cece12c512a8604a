//! First tier: operator overrides and the platform search path.

use systemhook_core::{LibraryNaming, LoaderConfig, NativeLoader, OverrideTarget};
use tracing::debug;

use super::{LoadSource, TierOutcome};

/// Try the configured library name, either by search path or from the
/// configured directory. Failure is recoverable.
pub(crate) fn try_override(
    loader: &dyn NativeLoader,
    config: &LoaderConfig,
    naming: LibraryNaming,
) -> TierOutcome {
    let target = config.override_target(naming);
    debug!(?target, "Trying native library override");

    let attempt = match &target {
        OverrideTarget::SearchPath(name) => loader.load_by_name(name),
        OverrideTarget::Path(path) => loader.load_path(path),
    };

    match attempt {
        Ok(()) => TierOutcome::Loaded(match target {
            OverrideTarget::SearchPath(name) => LoadSource::SearchPath { name },
            OverrideTarget::Path(path) => LoadSource::Override { path },
        }),
        Err(err) => TierOutcome::Recoverable(err),
    }
}
