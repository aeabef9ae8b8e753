//! Global CSS styles for the reconnect card.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
/* Colors come from theme::colors via root_variables() */
:root {
  /* Typography */
  --font-script: 'Dancing Script', 'Brush Script MT', cursive;
  --font-body: 'Quicksand', 'Nunito', 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: linear-gradient(160deg, var(--cream), var(--blush));
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  overflow: hidden;
}

.hidden {
  display: none !important;
}

/* === Card === */
.card-page {
  position: relative;
  z-index: 1;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
}

.card {
  width: 100%;
  max-width: 420px;
  background: var(--card-white);
  border-radius: 24px;
  box-shadow: 0 12px 40px rgba(232, 113, 143, 0.25);
  padding: 2.5rem 2rem;
  text-align: center;
}

.card-panel {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  animation: fade-in var(--transition-normal);
}

.card-title {
  font-family: var(--font-script);
  font-size: 2.25rem;
  font-weight: 400;
  color: var(--rose-deep);
}

.card-text {
  color: var(--text-secondary);
}

.card-question {
  font-size: 1.25rem;
  font-weight: 600;
}

.card-signoff {
  font-family: var(--font-script);
  font-size: 1.5rem;
  color: var(--rose-deep);
}

/* === Buttons === */
.button-row {
  position: relative;
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin-top: 0.5rem;
}

.btn-yes,
.btn-no,
.btn-back {
  position: relative;
  z-index: 1;
  font-family: var(--font-body);
  font-size: 1rem;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-yes {
  padding: 0.75rem 2rem;
  border: none;
  border-radius: 999px;
  background: var(--rose);
  color: white;
  box-shadow: 0 4px 14px rgba(255, 159, 183, 0.6);
}

.btn-yes:hover {
  transform: translateY(-2px) scale(1.04);
}

.btn-no {
  padding: 0.75rem 2rem;
  border: 2px solid var(--lilac);
  border-radius: 999px;
  background: transparent;
  color: var(--text-secondary);
}

.btn-no:hover {
  transform: translateY(-1px);
}

.btn-back {
  align-self: center;
  border: none;
  background: none;
  color: var(--text-secondary);
  text-decoration: underline;
}

/* === Hearts === */
.heart-rain {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 0;
}

.heart-container {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  height: 200px;
  pointer-events: none;
  overflow: visible;
}

.heart,
.falling-heart {
  position: absolute;
  transform: rotate(-45deg);
}

.heart::before,
.heart::after,
.falling-heart::before,
.falling-heart::after {
  content: '';
  position: absolute;
  width: 100%;
  height: 100%;
  border-radius: 50%;
  background: inherit;
}

.heart::before,
.falling-heart::before {
  top: -50%;
  left: 0;
}

.heart::after,
.falling-heart::after {
  top: 0;
  left: 50%;
}

.falling-heart {
  top: -40px;
  opacity: 0.8;
  animation-name: heart-fall;
  animation-timing-function: linear;
  animation-fill-mode: both;
}

.heart {
  bottom: 0;
  animation-name: heart-rise;
  animation-timing-function: ease-out;
  animation-fill-mode: forwards;
}

@keyframes heart-fall {
  from { transform: translateY(0) rotate(-45deg); }
  to { transform: translateY(110vh) rotate(-45deg); }
}

@keyframes heart-rise {
  0% { transform: translateY(0) rotate(-45deg) scale(0.6); opacity: 1; }
  100% { transform: translateY(-180px) rotate(-45deg) scale(1.1); opacity: 0; }
}

/* === Overlay === */
.overlay-message {
  position: fixed;
  inset: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--overlay-scrim);
  animation: fade-in var(--transition-normal);
}

.overlay-content {
  background: white;
  border-radius: 20px;
  padding: 2rem 2.5rem;
  text-align: center;
  box-shadow: 0 12px 40px rgba(0, 0, 0, 0.2);
}

.overlay-title {
  font-family: var(--font-script);
  font-size: 2.5rem;
  color: var(--rose-deep);
}

.overlay-text {
  color: var(--text-secondary);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
