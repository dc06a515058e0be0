//! Pointer hover transforms on cards. Stateless: every enter and leave maps
//! directly to styles.

use folio_protocol::{DomCommand, Target};

use crate::outbox::Outbox;

const CARD_TRANSITION: &str = "all 0.3s ease";

pub fn on_enter(target: Target, out: &mut Outbox<'_>) {
    match target {
        Target::ProjectCard(_) => {
            out.push(DomCommand::style(target, "transform", "translateY(-15px) rotateX(5deg)"));
            out.push(DomCommand::style(target, "transition", CARD_TRANSITION));
        }
        Target::CertificateCard(_) => {
            out.push(DomCommand::style(
                target,
                "transform",
                "translateY(-10px) rotateY(5deg) scale(1.02)",
            ));
        }
        Target::SkillCard(i) => {
            out.push(DomCommand::style(
                Target::SkillCardBar(i),
                "animation",
                "pulse 0.5s ease-in-out",
            ));
        }
        _ => {}
    }
}

pub fn on_leave(target: Target, out: &mut Outbox<'_>) {
    match target {
        Target::ProjectCard(_) => {
            out.push(DomCommand::style(target, "transform", "translateY(0) rotateX(0)"));
        }
        Target::CertificateCard(_) => {
            out.push(DomCommand::style(
                target,
                "transform",
                "translateY(0) rotateY(0) scale(1)",
            ));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Scheduler;

    #[test]
    fn project_card_tilts_and_resets() {
        let mut s = Scheduler::new();
        let mut out = Outbox::new(0.0, &mut s);
        on_enter(Target::ProjectCard(1), &mut out);
        on_leave(Target::ProjectCard(1), &mut out);
        assert_eq!(
            out.commands().last(),
            Some(&DomCommand::style(
                Target::ProjectCard(1),
                "transform",
                "translateY(0) rotateX(0)"
            ))
        );
        assert_eq!(out.commands().len(), 3);
    }

    #[test]
    fn skill_card_pulses_its_bar() {
        let mut s = Scheduler::new();
        let mut out = Outbox::new(0.0, &mut s);
        on_enter(Target::SkillCard(2), &mut out);
        on_leave(Target::SkillCard(2), &mut out);
        assert_eq!(
            out.into_commands(),
            vec![DomCommand::style(
                Target::SkillCardBar(2),
                "animation",
                "pulse 0.5s ease-in-out"
            )]
        );
    }
}
