//! Target capability traits.
//!
//! Actions never see a concrete node type. A `Target` answers capability
//! queries, and each primitive talks only to the narrow trait it needs.
//! Hosts implement the traits their nodes support and return `Some(self)`
//! from the matching query.

use bitflags::bitflags;

use crate::action::Action;
use crate::error::ActionError;
use crate::frames::SpriteFrame;
use crate::value::{Color3, Vec2};

bitflags! {
    /// Set of target capabilities, used to validate an action graph
    /// against a target before it starts.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        const POSITION   = 1 << 0;
        const ROTATION   = 1 << 1;
        const SCALE      = 1 << 2;
        const TINT       = 1 << 3;
        const VISIBILITY = 1 << 4;
        const FRAME      = 1 << 5;
    }
}

pub trait Positionable {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
}

/// Rotation in degrees.
pub trait Rotatable {
    fn rotation(&self) -> f32;
    fn set_rotation(&mut self, degrees: f32);
}

pub trait Scalable {
    fn scale_x(&self) -> f32;
    fn scale_y(&self) -> f32;
    fn set_scale_x(&mut self, scale: f32);
    fn set_scale_y(&mut self, scale: f32);
}

/// Opacity (0-255) and RGB color.
pub trait Tintable {
    fn opacity(&self) -> u8;
    fn set_opacity(&mut self, opacity: u8);
    fn color(&self) -> Color3;
    fn set_color(&mut self, color: Color3);
}

pub trait Visibility {
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
}

pub trait FrameDisplay {
    /// Currently displayed frame, if any.
    fn displayed_frame(&self) -> Option<SpriteFrame>;
    fn set_displayed_frame(&mut self, frame: &SpriteFrame);
    fn is_frame_displayed(&self, frame: &SpriteFrame) -> bool;
}

/// Object driven by actions. Every query defaults to "unsupported".
pub trait Target {
    fn positionable(&mut self) -> Option<&mut dyn Positionable> {
        None
    }
    fn rotatable(&mut self) -> Option<&mut dyn Rotatable> {
        None
    }
    fn scalable(&mut self) -> Option<&mut dyn Scalable> {
        None
    }
    fn tintable(&mut self) -> Option<&mut dyn Tintable> {
        None
    }
    fn visibility(&mut self) -> Option<&mut dyn Visibility> {
        None
    }
    fn frame_display(&mut self) -> Option<&mut dyn FrameDisplay> {
        None
    }

    /// Capabilities this target exposes, derived from the queries above.
    fn capabilities(&mut self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::POSITION, self.positionable().is_some());
        caps.set(Capabilities::ROTATION, self.rotatable().is_some());
        caps.set(Capabilities::SCALE, self.scalable().is_some());
        caps.set(Capabilities::TINT, self.tintable().is_some());
        caps.set(Capabilities::VISIBILITY, self.visibility().is_some());
        caps.set(Capabilities::FRAME, self.frame_display().is_some());
        caps
    }
}

/// Reject an action whose graph touches a capability the target lacks.
pub fn check_capabilities(action: &dyn Action, target: &mut dyn Target) -> Result<(), ActionError> {
    let missing = action.requirements() - target.capabilities();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ActionError::MissingCapability {
            action: action.name(),
            missing,
        })
    }
}
