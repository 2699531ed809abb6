//! Global CSS styles for the booking dashboard.
//!
//! Light surface, indigo primary, elevated panels.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #f5f6fa;
  --paper: #ffffff;
  --border: #e3e5ec;

  /* Primary */
  --primary: #3f51b5;
  --primary-light: rgba(63, 81, 181, 0.12);

  /* Text */
  --text-primary: rgba(0, 0, 0, 0.87);
  --text-secondary: rgba(0, 0, 0, 0.6);
  --text-muted: rgba(0, 0, 0, 0.38);

  /* Typography */
  --font-sans: 'Roboto', 'Helvetica Neue', Arial, sans-serif;

  /* Elevation 3 */
  --shadow-3: 0 3px 3px -2px rgba(0, 0, 0, 0.2),
              0 3px 4px 0 rgba(0, 0, 0, 0.14),
              0 1px 8px 0 rgba(0, 0, 0, 0.12);

  /* Spacing unit */
  --space: 8px;
  --radius: 8px;

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
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--surface);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Page === */
.dashboard {
  flex-grow: 1;
  padding: calc(var(--space) * 4);
}

.dashboard-heading {
  font-size: 2.125rem;
  font-weight: 400;
  margin-bottom: calc(var(--space) * 3);
}

.dashboard-empty {
  color: var(--text-secondary);
}

/* === Panels === */
.panel,
.stat-card {
  background: var(--paper);
  border-radius: var(--radius);
  box-shadow: var(--shadow-3);
  padding: calc(var(--space) * 2);
}

.panel-title {
  font-size: 1rem;
  font-weight: 600;
  margin-bottom: 0.35em;
}

/* === Stat Cards === */
.stat-grid {
  display: flex;
  flex-direction: column;
  gap: calc(var(--space) * 2);
  margin-bottom: calc(var(--space) * 3);
}

.stat-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: calc(var(--space) * 2);
}

.stat-cell {
  display: flex;
  justify-content: center;
  flex: 0 1 calc((100% - (var(--cards-per-row, 5) - 1) * var(--space) * 2) / var(--cards-per-row, 5));
  min-width: 0;
}

.stat-card {
  width: 100%;
  max-width: var(--card-max-width, 300px);
  display: flex;
  align-items: center;
}

.stat-icon {
  margin-right: calc(var(--space) * 2);
  color: var(--primary);
  display: flex;
}

.stat-title {
  font-size: 0.875rem;
  font-weight: 600;
}

.stat-value {
  font-size: 1.25rem;
  font-weight: 700;
  font-variant-numeric: tabular-nums;
}

/* === Charts === */
.chart-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: calc(var(--space) * 2);
}

.chart svg {
  width: 100%;
  height: auto;
  display: block;
}

.chart-gridline {
  stroke: var(--border);
  stroke-width: 1;
}

.chart-axis {
  stroke: var(--text-muted);
  stroke-width: 1;
}

.chart-tick text,
.chart-label {
  font-size: 11px;
  fill: var(--text-secondary);
}

.chart-bar {
  transition: opacity var(--transition-normal);
}

.chart-bar:hover {
  opacity: 0.8;
}

.chart-legend {
  list-style: none;
  display: flex;
  justify-content: center;
  gap: calc(var(--space) * 2);
  font-size: 0.75rem;
  color: var(--text-secondary);
  margin-bottom: var(--space);
}

.legend-swatch {
  display: inline-block;
  width: 28px;
  height: 10px;
  margin-right: 6px;
  vertical-align: middle;
}

/* === Responsive === */
@media (max-width: 900px) {
  .stat-cell {
    flex-basis: calc(50% - var(--space));
  }

  .chart-grid {
    grid-template-columns: 1fr;
  }
}

@media (max-width: 600px) {
  .stat-cell {
    flex-basis: 100%;
  }

  .dashboard {
    padding: calc(var(--space) * 2);
  }
}
"#;
