use std::fmt::Debug;
use std::io;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::windows::MockBindings;
use crate::pal::windows::{
    Bindings, BuildTargetBindings, GlobalMemoryStatus, ProcessMemoryInfo, SystemTimes,
};

#[derive(Clone)]
pub(crate) enum BindingsFacade {
    Real(&'static BuildTargetBindings),

    #[cfg(test)]
    Mock(Arc<MockBindings>),
}

impl BindingsFacade {
    pub(crate) const fn real() -> Self {
        Self::Real(&BuildTargetBindings)
    }
}

impl Bindings for BindingsFacade {
    fn global_memory_status(&self) -> io::Result<GlobalMemoryStatus> {
        match self {
            Self::Real(bindings) => bindings.global_memory_status(),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.global_memory_status(),
        }
    }

    fn process_memory_info(&self) -> io::Result<ProcessMemoryInfo> {
        match self {
            Self::Real(bindings) => bindings.process_memory_info(),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.process_memory_info(),
        }
    }

    fn system_times(&self) -> io::Result<SystemTimes> {
        match self {
            Self::Real(bindings) => bindings.system_times(),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.system_times(),
        }
    }

    fn number_of_processors(&self) -> u32 {
        match self {
            Self::Real(bindings) => bindings.number_of_processors(),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.number_of_processors(),
        }
    }
}

impl From<&'static BuildTargetBindings> for BindingsFacade {
    fn from(bindings: &'static BuildTargetBindings) -> Self {
        Self::Real(bindings)
    }
}

#[cfg(test)]
impl From<MockBindings> for BindingsFacade {
    fn from(bindings: MockBindings) -> Self {
        Self::Mock(Arc::new(bindings))
    }
}

impl Debug for BindingsFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(bindings) => bindings.fmt(f),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.fmt(f),
        }
    }
}
