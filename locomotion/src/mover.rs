use crate::types::Vec3;

/// Collision-aware mover the controller submits its displacement to.
///
/// Implementations own the character's position and its collision volume.
pub trait Mover {
    /// Try to move by `displacement` (world space) and return what was actually applied
    /// after resolving obstructions.
    fn move_with_collision(&mut self, displacement: Vec3) -> Vec3;

    /// Whether the collision volume currently rests on a supporting surface.
    fn is_grounded(&self) -> bool;
}

impl<M: Mover + ?Sized> Mover for Box<M> {
    fn move_with_collision(&mut self, displacement: Vec3) -> Vec3 {
        (**self).move_with_collision(displacement)
    }

    fn is_grounded(&self) -> bool {
        (**self).is_grounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ceiling(f32);

    impl Mover for Ceiling {
        fn move_with_collision(&mut self, displacement: Vec3) -> Vec3 {
            Vec3::new(displacement.x, displacement.y.min(self.0), displacement.z)
        }

        fn is_grounded(&self) -> bool {
            false
        }
    }

    #[test]
    fn boxed_movers_forward_to_the_inner_mover() {
        let mut boxed: Box<dyn Mover> = Box::new(Ceiling(0.5));
        let applied = boxed.move_with_collision(Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(applied, Vec3::new(1.0, 0.5, 0.0));
        assert!(!boxed.is_grounded());
    }
}
