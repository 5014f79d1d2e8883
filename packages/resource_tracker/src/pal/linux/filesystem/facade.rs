use std::fmt::Debug;
use std::io;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::linux::MockFilesystem;
use crate::pal::linux::{BuildTargetFilesystem, Filesystem};

#[derive(Clone)]
pub(crate) enum FilesystemFacade {
    Real(&'static BuildTargetFilesystem),

    #[cfg(test)]
    Mock(Arc<MockFilesystem>),
}

impl FilesystemFacade {
    pub(crate) const fn real() -> Self {
        Self::Real(&BuildTargetFilesystem)
    }
}

impl Filesystem for FilesystemFacade {
    fn get_meminfo_contents(&self) -> io::Result<String> {
        match self {
            Self::Real(filesystem) => filesystem.get_meminfo_contents(),
            #[cfg(test)]
            Self::Mock(filesystem) => filesystem.get_meminfo_contents(),
        }
    }

    fn get_proc_self_status_contents(&self) -> io::Result<String> {
        match self {
            Self::Real(filesystem) => filesystem.get_proc_self_status_contents(),
            #[cfg(test)]
            Self::Mock(filesystem) => filesystem.get_proc_self_status_contents(),
        }
    }

    fn get_proc_stat_contents(&self) -> io::Result<String> {
        match self {
            Self::Real(filesystem) => filesystem.get_proc_stat_contents(),
            #[cfg(test)]
            Self::Mock(filesystem) => filesystem.get_proc_stat_contents(),
        }
    }
}

impl From<&'static BuildTargetFilesystem> for FilesystemFacade {
    fn from(filesystem: &'static BuildTargetFilesystem) -> Self {
        Self::Real(filesystem)
    }
}

#[cfg(test)]
impl From<MockFilesystem> for FilesystemFacade {
    fn from(filesystem: MockFilesystem) -> Self {
        Self::Mock(Arc::new(filesystem))
    }
}

impl Debug for FilesystemFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(filesystem) => filesystem.fmt(f),
            #[cfg(test)]
            Self::Mock(filesystem) => filesystem.fmt(f),
        }
    }
}
