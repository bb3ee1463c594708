//! Global CSS styles for cyclesight.
//!
//! Dark arena aesthetic; rarity colors mirror `colors.rs`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BACKGROUNDS */
  --arena-black: #0b0b10;
  --arena-panel: #12121a;
  --arena-border: #23232f;

  /* ACCENTS */
  --elixir-pink: #e661d8;
  --gold: #d4af37;
  --cyan: #3ec7d4;

  /* RARITY */
  --rarity-common: #9aa5b1;
  --rarity-rare: #ff9f2e;
  --rarity-epic: #b45cff;
  --rarity-legendary: #4fd8e0;
  --rarity-champion: #ffd700;

  /* TEXT */
  --text-primary: #f2f2f5;
  --text-secondary: rgba(242, 242, 245, 0.7);
  --text-muted: rgba(242, 242, 245, 0.45);

  /* SEMANTIC */
  --danger: #ff3b5c;
  --warning: #ffb020;

  /* Typography */
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-mono);
  background: var(--arena-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Shell === */
.app-shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
  padding: 1rem 1.5rem;
  gap: 1rem;
}

.app-header {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
  border-bottom: 1px solid var(--arena-border);
  padding-bottom: 0.75rem;
}

.page-title {
  font-size: 1.75rem;
  font-weight: 600;
  color: var(--gold);
  letter-spacing: 0.08em;
}

.variant-link {
  color: var(--cyan);
  font-size: 0.875rem;
  text-decoration: none;
}

.variant-link:hover {
  text-decoration: underline;
}

.section-header {
  font-size: 1rem;
  font-weight: 500;
  color: var(--gold);
  margin-top: 1rem;
}

.empty-state {
  color: var(--text-muted);
  font-size: 0.875rem;
  padding: 1rem 0;
}

/* === Layout === */
.tracker-content {
  display: flex;
  flex-direction: row;
  gap: 2rem;
  align-items: flex-start;
}

.selection-panel {
  flex: 1;
  background: var(--arena-panel);
  border: 1px solid var(--arena-border);
  border-radius: 6px;
  padding: 1rem;
  max-height: 80vh;
  overflow-y: auto;
}

.cycle-board {
  flex: 1;
}

/* === Inputs === */
.input-field {
  width: 100%;
  background: var(--arena-black);
  border: 1px solid var(--arena-border);
  border-radius: 4px;
  color: var(--text-primary);
  font-family: var(--font-mono);
  padding: 0.5rem 0.75rem;
}

.input-field:focus {
  outline: none;
  border-color: var(--cyan);
}

/* === Sort bar === */
.sort-bar {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.sort-keys {
  display: flex;
  gap: 0.5rem;
}

.btn-sort {
  background: var(--arena-black);
  border: 1px solid var(--arena-border);
  border-radius: 4px;
  color: var(--text-secondary);
  font-family: var(--font-mono);
  font-size: 0.8125rem;
  padding: 0.375rem 0.75rem;
  cursor: pointer;
  transition: border-color var(--transition-fast);
}

.btn-sort:hover {
  border-color: var(--cyan);
}

.btn-sort.selected {
  color: var(--cyan);
  border-color: var(--cyan);
}

.btn-sort.direction {
  margin-left: auto;
  color: var(--text-primary);
}

/* === Card grid === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(72px, 1fr));
  gap: 0.75rem;
}

.card-tile {
  position: relative;
  background: var(--arena-panel);
  border: 1px solid var(--arena-border);
  border-radius: 6px;
  padding: 0.25rem;
  cursor: pointer;
  transition: transform var(--transition-fast), border-color var(--transition-fast);
}

.card-tile:hover {
  transform: translateY(-2px);
}

.card-tile.common { border-color: var(--rarity-common); }
.card-tile.rare { border-color: var(--rarity-rare); }
.card-tile.epic { border-color: var(--rarity-epic); }
.card-tile.legendary { border-color: var(--rarity-legendary); }
.card-tile.champion { border-color: var(--rarity-champion); }

.card-icon {
  width: 100%;
  height: auto;
  display: block;
}

.card-cost {
  position: absolute;
  top: 2px;
  left: 2px;
  background: var(--elixir-pink);
  color: var(--arena-black);
  font-size: 0.75rem;
  font-weight: 700;
  border-radius: 50%;
  width: 1.25rem;
  height: 1.25rem;
  display: flex;
  align-items: center;
  justify-content: center;
}

/* === Cycle board === */
.board-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.5rem;
}

.btn-reset {
  background: var(--danger);
  border: none;
  border-radius: 4px;
  color: var(--text-primary);
  font-family: var(--font-mono);
  padding: 0.5rem 1rem;
  cursor: pointer;
}

.btn-champion-death {
  background: var(--warning);
  border: none;
  border-radius: 4px;
  color: var(--arena-black);
  font-family: var(--font-mono);
  padding: 0.5rem 1rem;
  cursor: pointer;
}

.champion-slot {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-top: 0.75rem;
}

.champion-state {
  color: var(--rarity-champion);
  font-size: 0.8125rem;
}

.held-row, .upcoming-row {
  display: flex;
  flex-direction: row;
  gap: 0.75rem;
  border: 1px solid var(--arena-border);
  border-radius: 6px;
  padding: 0.75rem;
  min-height: 7rem;
}

.upcoming-row {
  border-style: dashed;
}

.card-frame {
  position: relative;
  width: 5rem;
  background: var(--arena-panel);
  border: 1px solid var(--arena-border);
  border-radius: 6px;
  padding: 0.25rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.25rem;
}

.card-frame.held {
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.card-frame.held:hover {
  transform: translateY(-2px);
}

.card-frame.common { border-color: var(--rarity-common); }
.card-frame.rare { border-color: var(--rarity-rare); }
.card-frame.epic { border-color: var(--rarity-epic); }
.card-frame.legendary { border-color: var(--rarity-legendary); }
.card-frame.champion { border-color: var(--rarity-champion); }

.cycle-badge {
  color: var(--text-secondary);
  font-size: 0.75rem;
}

.cycle-badge.next {
  color: var(--cyan);
  font-weight: 700;
}

/* === Search picker === */
.search-picker {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.search-row {
  display: flex;
  gap: 0.5rem;
}

.btn-primary {
  background: var(--cyan);
  border: none;
  border-radius: 4px;
  color: var(--arena-black);
  font-family: var(--font-mono);
  font-weight: 600;
  padding: 0.5rem 1rem;
  cursor: pointer;
}

.suggestion-list {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  max-height: 60vh;
  overflow-y: auto;
}

.suggestion {
  display: flex;
  justify-content: space-between;
  background: var(--arena-black);
  border: 1px solid var(--arena-border);
  border-radius: 4px;
  color: var(--text-primary);
  font-family: var(--font-mono);
  padding: 0.375rem 0.75rem;
  cursor: pointer;
  text-align: left;
}

.suggestion:hover {
  border-color: var(--cyan);
}

.suggestion.champion .suggestion-name { color: var(--rarity-champion); }
.suggestion.legendary .suggestion-name { color: var(--rarity-legendary); }
.suggestion.epic .suggestion-name { color: var(--rarity-epic); }
.suggestion.rare .suggestion-name { color: var(--rarity-rare); }

.suggestion-cost {
  color: var(--elixir-pink);
  font-weight: 700;
}
"#;
