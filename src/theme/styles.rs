//! Global CSS styles for Folio.
//!
//! Theme colours are CSS custom properties scoped to `.theme-light` and
//! `.theme-dark` on the page root; every rule below reads them.

pub const GLOBAL_STYLES: &str = r#"
/* === Theme Properties === */
.theme-light {
  --bg: #f8f9fb;
  --bg-alt: #eef1f6;
  --surface: #ffffff;
  --border: #dde2ea;
  --text-primary: #1c2330;
  --text-secondary: #5a6475;
  --accent: #3b5bdb;
  --accent-soft: rgba(59, 91, 219, 0.12);
  --success: #2f9e44;
  --danger: #e03131;
  --shadow: 0 6px 24px rgba(28, 35, 48, 0.08);
}

.theme-dark {
  --bg: #0f172a;
  --bg-alt: #131d33;
  --surface: #1b2540;
  --border: #2a3656;
  --text-primary: #e8ecf4;
  --text-secondary: #a3adc2;
  --accent: #7c93ff;
  --accent-soft: rgba(124, 147, 255, 0.16);
  --success: #51cf66;
  --danger: #ff6b6b;
  --shadow: 0 6px 24px rgba(0, 0, 0, 0.35);
}

:root {
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --radius: 10px;
  --nav-height: 64px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 1.2s cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  line-height: 1.6;
}

.portfolio {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text-primary);
  transition: background var(--transition-normal), color var(--transition-normal);
}

a {
  color: var(--accent);
  text-decoration: none;
}

.container {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.section {
  padding: 5rem 0;
  scroll-margin-top: var(--nav-height);
}

.section-alt {
  background: var(--bg-alt);
}

.section h2 {
  font-size: 2rem;
  margin-bottom: 2rem;
  text-align: center;
}

/* === Navigation === */
#navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--nav-height);
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 1.5rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
  box-shadow: var(--shadow);
}

.nav-brand span {
  font-weight: 700;
  font-size: 1.2rem;
}

.nav-menu {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: 0.25rem 0;
  border-bottom: 2px solid transparent;
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--accent);
  border-bottom-color: var(--accent);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.icon-btn {
  width: 38px;
  height: 38px;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: transparent;
  color: var(--text-primary);
  cursor: pointer;
  font-size: 1.1rem;
}

.icon-btn:hover {
  background: var(--accent-soft);
}

.nav-toggle {
  display: none;
  flex-direction: column;
  gap: 4px;
  background: transparent;
  border: none;
  cursor: pointer;
}

.nav-toggle span {
  width: 24px;
  height: 2px;
  background: var(--text-primary);
  transition: transform var(--transition-fast), opacity var(--transition-fast);
}

.nav-toggle.active span:nth-child(1) { transform: translateY(6px) rotate(45deg); }
.nav-toggle.active span:nth-child(2) { opacity: 0; }
.nav-toggle.active span:nth-child(3) { transform: translateY(-6px) rotate(-45deg); }

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.75rem 1.6rem;
  border-radius: var(--radius);
  font-weight: 600;
  font-size: 1rem;
  cursor: pointer;
  border: 2px solid var(--accent);
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn:hover {
  transform: translateY(-2px);
  box-shadow: var(--shadow);
}

.btn-primary {
  background: var(--accent);
  color: #ffffff;
}

.btn-secondary {
  background: transparent;
  color: var(--accent);
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: calc(var(--nav-height) + 2rem) 1.5rem 2rem;
  background: linear-gradient(135deg, var(--accent-soft), transparent 60%);
}

.hero-title {
  font-size: 3.5rem;
  line-height: 1.1;
}

.hero-subtitle {
  font-size: 1.5rem;
  color: var(--accent);
  margin-top: 0.5rem;
}

.hero-tagline {
  color: var(--text-secondary);
  margin-top: 1rem;
}

.hero-buttons {
  display: flex;
  gap: 1rem;
  justify-content: center;
  margin-top: 2rem;
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 2rem;
}

.about-details {
  margin-top: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

.detail-item {
  display: flex;
  gap: 0.75rem;
  align-items: center;
}

.about-availability {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
}

.availability-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 1rem;
}

.tag {
  padding: 0.3rem 0.8rem;
  border-radius: 999px;
  font-size: 0.85rem;
}

.tag-available {
  background: var(--accent-soft);
  color: var(--accent);
}

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1.5rem;
}

.skill-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
  opacity: 0.6;
  transform: translateY(12px);
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.skill-card.animate {
  opacity: 1;
  transform: none;
}

.skill-header {
  display: flex;
  gap: 0.75rem;
  align-items: center;
}

.skill-icon {
  font-size: 1.6rem;
}

.skill-category {
  color: var(--text-secondary);
  font-size: 0.85rem;
  margin: 0.5rem 0 1rem;
}

.skill-level {
  height: 8px;
  border-radius: 4px;
  background: var(--bg-alt);
  overflow: hidden;
}

.skill-progress {
  height: 100%;
  background: var(--accent);
  border-radius: 4px;
  transition: width var(--transition-slow);
}

.skill-percentage {
  display: block;
  text-align: right;
  font-size: 0.85rem;
  color: var(--text-secondary);
  margin-top: 0.4rem;
}

/* === Projects === */
.filter-buttons {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.6rem;
  margin-bottom: 2rem;
}

.filter-btn {
  padding: 0.5rem 1.2rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text-secondary);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.filter-btn:hover {
  border-color: var(--accent);
  color: var(--accent);
}

.filter-btn.active {
  background: var(--accent);
  border-color: var(--accent);
  color: #ffffff;
}

.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.project-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-4px);
  box-shadow: var(--shadow);
}

.project-card.featured {
  border-color: var(--accent);
}

.project-image {
  position: relative;
  height: 190px;
  overflow: hidden;
}

.project-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.project-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(15, 23, 42, 0.7);
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.project-card:hover .project-overlay {
  opacity: 1;
}

.project-links {
  display: flex;
  gap: 1rem;
}

.project-link {
  color: #ffffff;
  font-weight: 600;
}

.project-content {
  padding: 1.25rem;
}

.project-header {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
  gap: 0.5rem;
}

.project-category {
  font-size: 0.8rem;
  color: var(--accent);
}

.project-description {
  color: var(--text-secondary);
  margin: 0.75rem 0;
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.project-tag {
  font-size: 0.75rem;
  padding: 0.2rem 0.6rem;
  border-radius: 4px;
  background: var(--bg-alt);
}

/* === Contact === */
.contact-content > p {
  text-align: center;
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.contact-form {
  max-width: 720px;
  margin: 0 auto;
}

.form-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.25rem;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.form-group-full {
  grid-column: 1 / -1;
}

.form-group label {
  font-weight: 600;
  font-size: 0.9rem;
}

.form-input {
  font: inherit;
  padding: 0.7rem 0.9rem;
  border-radius: var(--radius);
  border: 2px solid var(--border);
  background: var(--surface);
  color: var(--text-primary);
  transition: border-color var(--transition-fast);
}

.form-input:focus {
  outline: none;
  border-color: var(--accent);
}

.form-group.success .form-input {
  border-color: var(--success);
}

.form-group.error .form-input {
  border-color: var(--danger);
}

.field-message {
  font-size: 0.8rem;
}

.error-message {
  color: var(--danger);
}

.success-message {
  color: var(--success);
}

.form-message {
  margin-top: 1rem;
  padding: 0.8rem 1rem;
  border-radius: var(--radius);
  font-weight: 500;
}

.form-message.success {
  background: rgba(47, 158, 68, 0.12);
  color: var(--success);
}

.form-message.error {
  background: rgba(224, 49, 49, 0.12);
  color: var(--danger);
}

/* === Footer === */
.footer {
  padding: 2rem 0;
  border-top: 1px solid var(--border);
}

.footer-content {
  display: flex;
  justify-content: space-between;
  align-items: center;
  flex-wrap: wrap;
  gap: 1rem;
  color: var(--text-secondary);
}

.social-links {
  display: flex;
  gap: 1.25rem;
}

.social-link {
  color: var(--text-secondary);
}

.social-link:hover {
  color: var(--accent);
}

/* === Responsive === */
@media (max-width: 768px) {
  .nav-toggle {
    display: flex;
  }

  .nav-menu {
    position: absolute;
    top: var(--nav-height);
    left: 0;
    right: 0;
    flex-direction: column;
    gap: 0;
    background: var(--surface);
    border-bottom: 1px solid var(--border);
    max-height: 0;
    overflow: hidden;
    transition: max-height var(--transition-normal);
  }

  .nav-menu.open {
    max-height: 400px;
  }

  .nav-menu li {
    padding: 0.75rem 1.5rem;
  }

  .hero-title {
    font-size: 2.4rem;
  }

  .about-grid,
  .form-grid {
    grid-template-columns: 1fr;
  }
}
"#;
