use folio_protocol::DomCommand;

use crate::outbox::Outbox;

pub const DYNAMIC_STYLES_ID: &str = "portfolio-dynamic-styles";

/// Keyframes and state classes the script's commands rely on. The static
/// stylesheet of the page does not define these.
pub const DYNAMIC_CSS: &str = r#"
@keyframes loadingFloat {
  0%, 100% { transform: translateY(0px) rotate(0deg); opacity: 0.6; }
  50% { transform: translateY(-20px) rotate(180deg); opacity: 1; }
}
@keyframes slideDown {
  from { opacity: 0; transform: translateY(-20px); }
  to { opacity: 1; transform: translateY(0); }
}
@keyframes slideUp {
  from { opacity: 1; transform: translateY(0); }
  to { opacity: 0; transform: translateY(-20px); }
}
@keyframes slideInUp {
  from { opacity: 0; transform: translateY(50px); }
  to { opacity: 1; transform: translateY(0); }
}
@keyframes slideInScale {
  from { opacity: 0; transform: translateY(30px) scale(0.9); }
  to { opacity: 1; transform: translateY(0) scale(1); }
}
@keyframes rotateIn {
  from { opacity: 0; transform: rotate(-10deg) scale(0.9); }
  to { opacity: 1; transform: rotate(0deg) scale(1); }
}
@keyframes skillCardPulse {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.02); }
}
@keyframes shake {
  0%, 100% { transform: translateX(0); }
  25% { transform: translateX(-5px); }
  75% { transform: translateX(5px); }
}
@keyframes rippleAnimation {
  to { transform: scale(4); opacity: 0; }
}
.ripple {
  position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.3);
  transform: scale(0); animation: rippleAnimation 0.6s linear; pointer-events: none;
}
.success-message {
  position: fixed; top: 50%; left: 50%; z-index: 10000;
  background: linear-gradient(135deg, #10b981, #3b82f6); color: white;
  padding: 2rem; border-radius: 1rem; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.3);
  opacity: 0; transform: translate(-50%, -50%) scale(0.8); transition: all 0.3s ease;
}
.success-message.visible { opacity: 1; transform: translate(-50%, -50%) scale(1); }
.success-content { text-align: center; }
.success-content i { font-size: 3rem; margin-bottom: 1rem; color: white; }
.success-content h3 { margin-bottom: 0.5rem; color: white; }
.success-content p { margin: 0; opacity: 0.9; }
.custom-cursor {
  width: 20px; height: 20px; border: 2px solid #6366f1; border-radius: 50%;
  position: fixed; pointer-events: none; z-index: 9999;
  transition: all 0.1s ease; mix-blend-mode: difference;
}
.cursor-dot {
  width: 4px; height: 4px; background: #06b6d4; border-radius: 50%;
  position: fixed; pointer-events: none; z-index: 9999; transition: all 0.05s ease;
}
.custom-cursor.cursor-hover { width: 40px; height: 40px; border-color: #ec4899; }
.form-control.valid {
  border-color: #10b981 !important;
  box-shadow: 0 0 0 3px rgba(16, 185, 129, 0.2) !important;
}
.keyboard-navigation *:focus { outline: 2px solid #6366f1 !important; outline-offset: 2px !important; }
.nav-menu.active {
  display: flex !important; position: absolute; top: 100%; left: 0; width: 100%;
  background: rgba(15, 23, 42, 0.98); flex-direction: column; padding: 1rem;
  backdrop-filter: blur(20px); border-top: 1px solid rgba(255, 255, 255, 0.1);
  z-index: 1000; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
}
.nav-menu.active .nav-link {
  padding: 1rem; border-bottom: 1px solid rgba(255, 255, 255, 0.1); transition: all 0.3s ease;
}
.nav-menu.active .nav-link:hover { background: rgba(255, 255, 255, 0.1); border-radius: 0.5rem; }
.mobile-menu-toggle.active span:nth-child(1) { transform: rotate(-45deg) translate(-5px, 6px); }
.mobile-menu-toggle.active span:nth-child(2) { opacity: 0; }
.mobile-menu-toggle.active span:nth-child(3) { transform: rotate(45deg) translate(-5px, -6px); }
.loading-screen .loader { position: relative; z-index: 2; }
body.loaded { overflow-x: hidden; }
@media (max-width: 768px) {
  .nav-menu { display: none; }
  .mobile-menu-toggle { display: flex !important; }
}
"#;

pub fn inject(out: &mut Outbox<'_>) {
    out.push(DomCommand::InjectStyles {
        id: DYNAMIC_STYLES_ID.into(),
        css: DYNAMIC_CSS.into(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_animation_used_by_the_core_is_defined() {
        for name in [
            "loadingFloat",
            "slideDown",
            "slideUp",
            "slideInUp",
            "slideInScale",
            "rotateIn",
            "skillCardPulse",
            "shake",
            "rippleAnimation",
        ] {
            assert!(
                DYNAMIC_CSS.contains(&format!("@keyframes {name} ")),
                "{name} missing"
            );
        }
    }

    #[test]
    fn braces_balance() {
        let open = DYNAMIC_CSS.matches('{').count();
        let close = DYNAMIC_CSS.matches('}').count();
        assert_eq!(open, close);
    }
}
