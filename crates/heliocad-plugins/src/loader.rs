//! Opening plugin modules.

use libloading::Library;
use std::path::Path;

use crate::contract::{RegisterFn, ENTRY_POINT};

/// An opened plugin module.
pub trait PluginModule {
    /// The registration function, or `None` if the module does not export it.
    fn entry_point(&self) -> Option<RegisterFn>;
}

/// Opens plugin modules from files.
pub trait ModuleLoader {
    /// Open the module at `path`. The error is a human-readable cause.
    fn open(&self, path: &Path) -> Result<Box<dyn PluginModule>, String>;

    /// File extension of loadable modules, without the dot.
    fn extension(&self) -> &str {
        std::env::consts::DLL_EXTENSION
    }
}

/// Loads shared libraries with `libloading`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibraryLoader;

struct LibraryModule {
    library: Library,
}

impl PluginModule for LibraryModule {
    fn entry_point(&self) -> Option<RegisterFn> {
        // SAFETY: plugins are built against this crate with the same compiler,
        // so the exported symbol has exactly the `RegisterFn` signature. The
        // returned pointer is only called while the owning record keeps
        // `library` loaded.
        unsafe {
            self.library
                .get::<RegisterFn>(ENTRY_POINT.as_bytes())
                .ok()
                .map(|symbol| *symbol)
        }
    }
}

impl ModuleLoader for LibraryLoader {
    fn open(&self, path: &Path) -> Result<Box<dyn PluginModule>, String> {
        // SAFETY: loading a library runs its initializers. Plugins are trusted
        // code from the user's module directory.
        let library = unsafe { Library::new(path) }.map_err(|e| e.to_string())?;
        Ok(Box::new(LibraryModule { library }))
    }
}
