//! `start()`: size the surface, wait for it to be valid, then hand it to the
//! render loop exactly once.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::coordinator::SurfaceCoordinator;
use crate::error::StartError;
use crate::hooks::RenderHooks;
use crate::surface::{FrameClock, Surface, Viewport};

/// The externally owned render loop.
#[async_trait(?Send)]
pub trait RenderLoop<H> {
    /// Must finish before the surface is handed over.
    async fn init(&mut self) -> anyhow::Result<()>;

    /// Notification hooks the coordinator should drive after handoff.
    fn hooks(&self) -> Option<Box<dyn RenderHooks>> {
        None
    }

    /// Take ownership of the surface and run the loop.
    fn run(self, surface: H);
}

/// Resolves on the next animation frame.
#[async_trait(?Send)]
pub trait NextFrame {
    async fn next_frame(&self);
}

/// Drive the coordinator from `Uninitialized` to `Ready`.
///
/// The coordinator lives in a `RefCell` because host event callbacks share it;
/// no borrow is held across an await.
pub async fn start<S, V, C, F, M>(
    coordinator: &RefCell<SurfaceCoordinator<S, V, C>>,
    frames: &F,
    mut module: M,
) -> Result<(), StartError>
where
    S: Surface,
    V: Viewport,
    C: FrameClock,
    F: NextFrame + ?Sized,
    M: RenderLoop<S::Handle>,
{
    coordinator.borrow().config().validate()?;
    coordinator.borrow_mut().resize();

    let mut waited = 0u32;
    while !coordinator.borrow().is_surface_valid() {
        frames.next_frame().await;
        waited += 1;
        // Layout may have settled since the last frame.
        coordinator.borrow_mut().resize();
    }
    if waited > 0 {
        tracing::debug!(frames = waited, "surface became valid");
    }

    module.init().await.map_err(StartError::ModuleInit)?;

    let handle = {
        let mut coordinator = coordinator.borrow_mut();
        let hooks = module.hooks();
        coordinator.hand_off(hooks)
    };

    module.run(handle);
    Ok(())
}
