//! Global CSS for the pixel valentine card.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PINKS */
  --pink: #ec4899;
  --pink-deep: #db2777;
  --pink-soft: #f9a8d4;

  /* REDS */
  --red: #ef4444;
  --red-deep: #dc2626;
  --red-soft: #fca5a5;

  /* PAPER & INK */
  --paper: #fffdf5;
  --ink: #1f2937;
  --ink-muted: #6b7280;

  /* ACCENTS */
  --gold: #ffd60a;
  --purple: #a855f7;

  /* Typography */
  --font-pixel: 'Press Start 2P', 'Courier New', monospace;
  --font-serif: Georgia, 'Times New Roman', serif;
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
  font-family: var(--font-pixel);
  background: linear-gradient(180deg, #fdf2f8 0%, #fce7f3 60%, #fbcfe8 100%);
  color: var(--ink);
  min-height: 100vh;
  overflow-x: hidden;
}

button {
  font-family: inherit;
  cursor: pointer;
}

img {
  user-select: none;
}

/* === Pixel Border === */
.pixel-border {
  border: 4px solid #000;
  box-shadow: 4px 4px 0 rgba(0, 0, 0, 0.25);
  image-rendering: pixelated;
}

/* === Buttons === */
.pixel-btn {
  position: relative;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  font-family: var(--font-pixel);
  font-weight: bold;
  text-transform: uppercase;
  font-size: 1rem;
  padding: 0.75rem 1.5rem;
  border: 4px solid #000;
  box-shadow: 4px 4px 0 rgba(0, 0, 0, 0.25);
  transition: transform 100ms ease, background 150ms ease;
}

.pixel-btn:active {
  transform: translateY(4px);
  box-shadow: 0 0 0 rgba(0, 0, 0, 0.25);
}

.pixel-btn-highlight {
  position: absolute;
  top: 4px;
  left: 4px;
  right: 4px;
  height: 4px;
  background: rgba(255, 255, 255, 0.2);
  pointer-events: none;
}

.pixel-btn-primary {
  background: var(--pink);
  color: #fff;
}

.pixel-btn-primary:hover {
  background: var(--pink-deep);
}

.pixel-btn-secondary {
  background: #fff;
  color: #000;
}

.pixel-btn-secondary:hover {
  background: #f3f4f6;
}

.pixel-btn-danger {
  background: var(--red);
  color: #fff;
}

.pixel-btn-danger:hover {
  background: var(--red-deep);
}

.decline-btn {
  font-size: 0.8rem;
}

/* === Stage Layout === */
.card-stage {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  position: relative;
  overflow: hidden;
}

.card-content {
  position: relative;
  z-index: 1;
  width: 100%;
  max-width: 80rem;
  text-align: center;
}

.screen {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
}

/* === Drifting Hearts === */
.heart-drift-layer {
  position: absolute;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  overflow: hidden;
}

.drift-heart {
  position: absolute;
  top: 100%;
  opacity: 0.6;
  mix-blend-mode: multiply;
  animation: float-up linear infinite;
}

@keyframes float-up {
  from {
    transform: translateY(0) rotate(-4deg);
  }
  to {
    transform: translateY(-220vh) rotate(4deg);
  }
}

/* === Enter Animations === */
.screen-enter {
  animation: fade-zoom 500ms ease both;
}

.screen-enter-slow {
  animation: fade-in 700ms ease both;
}

@keyframes fade-zoom {
  from {
    opacity: 0;
    transform: scale(0.92);
  }
  to {
    opacity: 1;
    transform: scale(1);
  }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Asking Screen === */
.asking-screen {
  gap: 2.5rem;
}

.portrait-wrap {
  position: relative;
  display: inline-block;
}

.polaroid {
  background: #fff;
  padding: 1rem;
  position: relative;
  display: inline-block;
}

.portrait-img {
  width: 16rem;
  max-height: 24rem;
  aspect-ratio: 1 / 1;
  object-fit: cover;
  display: block;
}

.notification-badge {
  position: absolute;
  top: -0.75rem;
  right: -0.75rem;
  animation: pixel-bounce 1s ease-in-out infinite;
}

.badge-mark {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  padding-top: 4px;
  font-size: 8px;
  color: #fff;
  font-weight: bold;
}

.prompt-title {
  font-size: 1.75rem;
  line-height: 1.6;
  color: var(--red-deep);
  padding: 0 1rem;
  text-shadow: 2px 2px 0 rgba(255, 255, 255, 0.8);
}

.choice-row {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: center;
  gap: 1rem;
}

.accept-glyph {
  margin-left: 0.5rem;
}

/* === Success Screen === */
.success-screen {
  min-height: 60vh;
  justify-content: center;
}

.success-title {
  font-size: 2.5rem;
  line-height: 1.5;
  color: var(--red-deep);
  background: rgba(255, 255, 255, 0.7);
  backdrop-filter: blur(4px);
  padding: 1.5rem 2rem;
  border-radius: 12px;
}

.success-subtitle {
  font-size: 1.25rem;
  color: var(--pink-deep);
}

.gift-teaser {
  margin-top: 2rem;
}

.gift-btn {
  font-size: 1.125rem;
  padding: 1rem 2rem;
}

.gift-bounce {
  animation: pixel-bounce 1s ease-in-out infinite;
}

@keyframes pixel-bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-10px); }
}

/* === Gift Gallery === */
.gift-row {
  flex-direction: row;
  flex-wrap: wrap;
  justify-content: center;
  gap: 2rem;
}

.gallery-polaroid {
  padding: 0.75rem 0.75rem 3rem;
  transition: transform 500ms ease, background 300ms ease;
}

.gallery-polaroid.clickable {
  cursor: pointer;
}

.gallery-polaroid.clickable:hover {
  transform: rotate(0deg) scale(1.05);
}

.tilt-left { transform: rotate(-3deg); }
.tilt-right { transform: rotate(2deg); }
.tilt-left-slight { transform: rotate(-2deg); }

.polaroid-tape {
  position: absolute;
  top: -0.75rem;
  left: 50%;
  width: 5rem;
  height: 1.5rem;
  transform: translateX(-50%) rotate(-2deg);
}

.tape-pink { background: rgba(249, 168, 212, 0.5); }
.tape-red { background: rgba(252, 165, 165, 0.5); transform: translateX(-50%) rotate(1deg); }
.tape-purple { background: rgba(216, 180, 254, 0.5); transform: translateX(-50%) rotate(-3deg); }

.numbered-cell {
  width: 16rem;
  height: 16rem;
  border: 2px solid #f3f4f6;
  background: #f9fafb;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: background 300ms ease;
}

.gallery-polaroid:hover .cell-pink { background: #fdf2f8; }
.gallery-polaroid:hover .cell-red { background: #fef2f2; }
.gallery-polaroid:hover .cell-purple { background: #faf5ff; }

.cell-number {
  font-size: 6rem;
  font-weight: bold;
}

.cell-pink .cell-number { color: #f472b6; }
.cell-red .cell-number { color: #f87171; }
.cell-purple .cell-number { color: #c084fc; }

/* === Back Button === */
.back-btn {
  position: absolute;
  top: 0;
  left: 0;
  z-index: 20;
  font-size: 0.75rem;
  padding: 0.6rem 1rem;
}

/* === Rose Reveal === */
.reveal-screen {
  min-height: 32rem;
  justify-content: center;
  width: 100%;
}

.reveal-centerpiece {
  position: relative;
  z-index: 10;
}

.love-word {
  position: absolute;
  font-size: 1.5rem;
  font-weight: bold;
  color: var(--pink-deep);
  white-space: nowrap;
  pointer-events: none;
  text-shadow:
    2px 2px 0 #fff,
    -2px -2px 0 #fff,
    2px -2px 0 #fff,
    -2px 2px 0 #fff;
  animation: word-float 6s ease-in-out infinite;
}

@keyframes word-float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-18px); }
}

/* === Bouquet === */
.bouquet-frame {
  width: clamp(22rem, 55vw, 42rem);
  height: clamp(22rem, 55vw, 42rem);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
}

.bouquet-svg {
  width: 100%;
  height: 100%;
  image-rendering: pixelated;
  filter: drop-shadow(0 20px 24px rgba(0, 0, 0, 0.2));
}

.sparkle {
  animation: sparkle-pulse 2s ease-in-out infinite;
}

@keyframes sparkle-pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.2; }
}

.sparkle-drift {
  animation: pixel-bounce 3s ease-in-out infinite;
}

/* === Letter === */
.letter-screen {
  min-height: 80vh;
  justify-content: center;
  width: 100%;
  padding: 1rem;
}

.letter-sheet {
  position: relative;
  background: var(--paper);
  color: #000;
  width: 100%;
  max-width: 42rem;
  margin: 0 auto;
  transform: rotate(1deg);
  padding: 3rem 2.5rem;
}

.letter-tape {
  position: absolute;
  top: -0.75rem;
  left: 50%;
  width: 8rem;
  height: 2rem;
  background: rgba(249, 168, 212, 0.6);
  transform: translateX(-50%) rotate(-2deg);
}

.letter-stamp {
  position: absolute;
  top: 1rem;
  right: 1rem;
  width: 4rem;
  height: 4rem;
  object-fit: cover;
  border: 4px solid #fff;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2);
  opacity: 0.8;
  transform: rotate(12deg);
}

.letter-body-wrap {
  text-align: left;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  position: relative;
  z-index: 10;
}

.letter-salutation {
  font-family: var(--font-pixel);
  font-size: 0.7rem;
  line-height: 2;
  color: var(--pink-deep);
  border-bottom: 2px solid #fce7f3;
  padding-bottom: 1rem;
}

.letter-body {
  font-family: var(--font-serif);
  font-size: 1.1rem;
  line-height: 2;
  letter-spacing: 0.02em;
  color: var(--ink);
}

.letter-signoff {
  font-family: var(--font-pixel);
  font-size: 0.7rem;
  text-align: right;
  color: var(--red);
  padding-top: 2rem;
}

.letter-signature {
  font-size: 1.1rem;
}

.letter-hearts {
  position: absolute;
  bottom: 0.5rem;
  left: 0.5rem;
  display: flex;
  gap: 0.25rem;
}

/* === Song === */
.song-screen {
  min-height: 80vh;
  justify-content: center;
  width: 100%;
  padding: 1rem;
}

.song-card {
  position: relative;
  background: #fff;
  max-width: 28rem;
  width: 100%;
  margin: 0 auto;
  padding: 2rem;
  transform: rotate(1deg);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
}

.vinyl {
  position: absolute;
  top: -2rem;
  right: -2rem;
  width: 5rem;
  height: 5rem;
  pointer-events: none;
  animation: spin-slow 4s linear infinite;
}

.vinyl-disc {
  position: absolute;
  inset: 0;
  border-radius: 50%;
  background: #111827;
}

.vinyl-label {
  position: absolute;
  top: 50%;
  left: 50%;
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  background: var(--pink-soft);
  transform: translate(-50%, -50%);
}

@keyframes spin-slow {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

.note {
  position: absolute;
  pointer-events: none;
  font-size: 2rem;
}

.note-bounce {
  top: 0;
  left: -1.5rem;
  color: var(--pink-soft);
  animation: pixel-bounce 1.2s ease-in-out infinite 100ms;
}

.note-pulse {
  bottom: 5rem;
  right: -1.5rem;
  color: var(--purple);
  font-size: 1.5rem;
  animation: soft-pulse 2s ease-in-out infinite 300ms;
}

@keyframes soft-pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}

.song-title {
  font-size: 1.5rem;
  color: var(--pink-deep);
  margin-top: 0.5rem;
}

.song-cover {
  position: relative;
  width: 100%;
}

.song-cover-shadow {
  position: absolute;
  inset: 0;
  transform: translate(8px, 8px);
  background: #111827;
}

.song-cover-img {
  position: relative;
  width: 100%;
  height: auto;
  border: 4px solid #fff;
  object-fit: cover;
}

.player-bar {
  width: 100%;
  background: #f9fafb;
  border: 2px solid #e5e7eb;
  border-radius: 8px;
  padding: 0.75rem;
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.player-dot {
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  background: var(--pink);
  color: #fff;
  font-size: 0.8rem;
  display: flex;
  align-items: center;
  justify-content: center;
  animation: soft-pulse 2s ease-in-out infinite;
}

.player-track {
  flex: 1;
  height: 0.5rem;
  background: #e5e7eb;
  border-radius: 999px;
  overflow: hidden;
}

.player-progress {
  width: 66%;
  height: 100%;
  background: #f472b6;
}

.player-time {
  font-size: 0.6rem;
  color: var(--ink-muted);
}

/* === Music Control === */
.music-control {
  position: fixed;
  bottom: 1rem;
  right: 1rem;
  z-index: 30;
  display: flex;
  gap: 0.5rem;
}

.music-control-btn {
  background: #1f2937;
  color: #fff;
  padding: 0.6rem 0.8rem;
  font-size: 1rem;
  transition: transform 100ms ease, background 150ms ease;
}

.music-control-btn:hover {
  background: #374151;
}

.music-control-btn:active {
  transform: translateY(4px);
}

/* === Responsive === */
@media (max-width: 768px) {
  .prompt-title { font-size: 1.1rem; }
  .success-title { font-size: 1.5rem; }
  .numbered-cell { width: 12rem; height: 12rem; }
  .cell-number { font-size: 4rem; }
  .love-word { font-size: 1rem; }
  .vinyl { width: 3.5rem; height: 3.5rem; top: -1rem; right: -1rem; }
}
"#;
