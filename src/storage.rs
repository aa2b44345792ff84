//! # Storage de Archivos
//! src/storage.rs
//!
//! Colaborador de filesystem usado por el handler de `/files`.
//!
//! ## Limitaciones conocidas
//!
//! - El nombre viene directo del segmento de la URL y **no** se sanitiza:
//!   un nombre como `..` o un path absoluto sale del directorio raíz.
//! - No hay locking: dos POST concurrentes al mismo archivo compiten, y un
//!   GET concurrente puede ver una escritura parcial.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Operaciones de archivo que necesitan los handlers
pub trait FileStorage: Send + Sync {
    /// Lee el archivo completo
    fn read(&self, name: &str) -> io::Result<Vec<u8>>;

    /// Crea (o trunca) el archivo y escribe todos los bytes
    fn write(&self, name: &str, contents: &[u8]) -> io::Result<()>;
}

/// Storage respaldado por un directorio del filesystem
#[derive(Debug, Clone)]
pub struct DirectoryStorage {
    root: PathBuf,
}

impl DirectoryStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ruta final del archivo dentro del directorio raíz
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl FileStorage for DirectoryStorage {
    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(name))
    }

    fn write(&self, name: &str, contents: &[u8]) -> io::Result<()> {
        fs::write(self.resolve(name), contents)
    }
}
