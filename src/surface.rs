// Surface dimensions and the manager that keeps them in sync with the host window.

use crate::error::FieldError;
use crate::renderer::DrawContext;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Surface {
        Surface { width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Source of the dimensions the drawing surface has to cover: the viewport
/// width and the full scrollable document height.
pub trait Viewport {
    fn viewport_width(&self) -> Result<u32, FieldError>;
    fn document_height(&self) -> Result<u32, FieldError>;
}

/// Viewport with fixed dimensions, for headless fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedViewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport for FixedViewport {
    fn viewport_width(&self) -> Result<u32, FieldError> {
        Ok(self.width)
    }

    fn document_height(&self) -> Result<u32, FieldError> {
        Ok(self.height)
    }
}

#[derive(Debug, Default)]
pub struct SurfaceManager {
    surface: Surface,
}

impl SurfaceManager {
    pub fn new() -> Self {
        SurfaceManager::default()
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    // Always pushes the measured size to the target; returns true only when
    // the dimensions differ from the previous ones.
    pub fn resize<V, C>(&mut self, viewport: &V, target: &mut C) -> Result<bool, FieldError>
    where
        V: Viewport + ?Sized,
        C: DrawContext + ?Sized,
    {
        let measured = Surface::new(viewport.viewport_width()?, viewport.document_height()?);
        target.set_size(measured.width, measured.height);
        let changed = measured != self.surface;
        self.surface = measured;
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;

    #[test]
    fn resize_takes_viewport_width_and_document_height() {
        let mut manager = SurfaceManager::new();
        let mut target: Vec<DrawCommand> = Vec::new();
        let viewport = FixedViewport {
            width: 1280,
            height: 4100,
        };
        assert_eq!(manager.resize(&viewport, &mut target), Ok(true));
        assert_eq!(manager.surface(), Surface::new(1280, 4100));
        assert_eq!(
            target,
            vec![DrawCommand::SetSize {
                width: 1280,
                height: 4100
            }]
        );
    }

    #[test]
    fn repeated_resize_reports_no_change() {
        let mut manager = SurfaceManager::new();
        let mut target: Vec<DrawCommand> = Vec::new();
        let viewport = FixedViewport {
            width: 640,
            height: 480,
        };
        assert_eq!(manager.resize(&viewport, &mut target), Ok(true));
        assert_eq!(manager.resize(&viewport, &mut target), Ok(false));
        assert_eq!(manager.surface(), Surface::new(640, 480));

        let taller = FixedViewport {
            width: 640,
            height: 900,
        };
        assert_eq!(manager.resize(&taller, &mut target), Ok(true));
        assert_eq!(manager.surface().area(), 640 * 900);
    }
}
