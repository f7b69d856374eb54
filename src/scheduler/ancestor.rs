//! Watched-ancestor selection
//!
//! Transition and animation lifecycle notifications are attached to the
//! nearest ancestor whose computed style declares an animation or a
//! transition-enabled property, not to the target itself. The lookup is
//! a static, one-time walk performed at setup.

use crate::host::ElementChain;

/// Computed animation/transition capabilities of one element, as read
/// by the host's style inspection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionProfile {
    pub has_animation: bool,
    pub has_transition: bool,
}

impl MotionProfile {
    /// True when either capability is present
    pub fn is_animated(&self) -> bool {
        self.has_animation || self.has_transition
    }
}

/// Capability for reading an element's computed animation/transition
/// style. Host-specific global state lives behind this trait, injected
/// into the ancestor walk rather than reached for directly.
pub trait StyleInspector<E> {
    fn describe(&self, element: &E) -> MotionProfile;
}

/// Walk upward from `target` (inclusive) to the nearest element whose
/// profile shows an animation or transition. Falls back to the target
/// itself when no qualifying ancestor exists; never fails.
pub fn find_animated_ancestor<E, I>(target: &E, inspector: &I) -> E
where
    E: ElementChain,
    I: StyleInspector<E>,
{
    let mut current = Some(target.clone());
    while let Some(element) = current {
        if inspector.describe(&element).is_animated() {
            return element;
        }
        current = element.parent();
    }
    target.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ElementHandle;
    use crate::scheduler::Dimensions;
    use std::rc::Rc;

    #[derive(Clone)]
    struct TreeElement {
        inner: Rc<TreeInner>,
    }

    struct TreeInner {
        name: &'static str,
        profile: MotionProfile,
        parent: Option<TreeElement>,
    }

    impl TreeElement {
        fn new(name: &'static str, profile: MotionProfile, parent: Option<TreeElement>) -> Self {
            Self {
                inner: Rc::new(TreeInner {
                    name,
                    profile,
                    parent,
                }),
            }
        }
    }

    impl ElementHandle for TreeElement {
        fn bounds(&self) -> Dimensions {
            Dimensions::ZERO
        }
    }

    impl ElementChain for TreeElement {
        fn parent(&self) -> Option<Self> {
            self.inner.parent.clone()
        }
    }

    struct ComputedStyles;

    impl StyleInspector<TreeElement> for ComputedStyles {
        fn describe(&self, element: &TreeElement) -> MotionProfile {
            element.inner.profile
        }
    }

    const STATIC: MotionProfile = MotionProfile {
        has_animation: false,
        has_transition: false,
    };
    const TRANSITIONED: MotionProfile = MotionProfile {
        has_animation: false,
        has_transition: true,
    };
    const ANIMATED: MotionProfile = MotionProfile {
        has_animation: true,
        has_transition: false,
    };

    #[test]
    fn test_finds_nearest_qualifying_ancestor() {
        let root = TreeElement::new("root", ANIMATED, None);
        let middle = TreeElement::new("middle", TRANSITIONED, Some(root));
        let target = TreeElement::new("target", STATIC, Some(middle));

        let found = find_animated_ancestor(&target, &ComputedStyles);
        assert_eq!(found.inner.name, "middle");
    }

    #[test]
    fn test_target_itself_qualifies() {
        let root = TreeElement::new("root", TRANSITIONED, None);
        let target = TreeElement::new("target", ANIMATED, Some(root));

        let found = find_animated_ancestor(&target, &ComputedStyles);
        assert_eq!(found.inner.name, "target");
    }

    #[test]
    fn test_falls_back_to_target() {
        let root = TreeElement::new("root", STATIC, None);
        let target = TreeElement::new("target", STATIC, Some(root));

        let found = find_animated_ancestor(&target, &ComputedStyles);
        assert_eq!(found.inner.name, "target");
    }
}
