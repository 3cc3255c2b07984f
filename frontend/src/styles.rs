/// Page stylesheet, rendered once by the app root.
pub const SITE_CSS: &str = r#"
:root {
    --color-primary: #5e6ad2;
    --color-primary-dark: #4c56b8;
    --color-gray-50: #f9fafb;
    --color-gray-100: #f3f4f6;
    --color-gray-200: #e5e7eb;
    --color-gray-500: #6b7280;
    --color-gray-900: #111827;
    --spacing-2: 0.5rem;
    --spacing-4: 1rem;
    --spacing-8: 2rem;
    --radius: 8px;
    --transition-fast: 150ms ease;
    --transition-normal: 250ms ease;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Inter", "Segoe UI", Roboto, sans-serif;
    color: var(--color-gray-900);
    background: white;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 var(--spacing-4);
}

/* Navbar */
.navbar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--color-gray-200);
    transition: transform var(--transition-normal), background-color var(--transition-normal), box-shadow var(--transition-normal);
}
.navbar .container {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 64px;
}
.nav-logo {
    display: flex;
    align-items: center;
    gap: var(--spacing-2);
    font-weight: 600;
    color: inherit;
    text-decoration: none;
}
.logo-mark {
    width: 20px;
    height: 20px;
    border-radius: 50%;
    background: var(--color-primary);
}
.nav-menu {
    display: flex;
    gap: var(--spacing-8);
}
.nav-link {
    color: var(--color-gray-500);
    text-decoration: none;
    transition: color var(--transition-fast);
}
.nav-link:hover { color: var(--color-gray-900); }
.nav-actions {
    display: flex;
    gap: var(--spacing-2);
}

/* Buttons */
.btn {
    position: relative;
    overflow: hidden;
    padding: 8px 16px;
    border: 1px solid transparent;
    border-radius: var(--radius);
    font: inherit;
    font-weight: 500;
    cursor: pointer;
    transition: transform var(--transition-fast), background-color var(--transition-fast);
}
.btn:disabled { cursor: progress; opacity: 0.7; }
.btn-large { padding: 12px 24px; font-size: 1.05rem; }
.btn-primary { background: var(--color-primary); color: white; }
.btn-primary:hover { background: var(--color-primary-dark); }
.btn-secondary { background: white; color: var(--color-gray-900); border-color: var(--color-gray-200); }
.btn-ghost { background: transparent; color: var(--color-gray-900); }

.ripple {
    position: absolute;
    border-radius: 50%;
    background-color: rgba(255, 255, 255, 0.3);
    transform: scale(0);
    animation: ripple 600ms linear;
    pointer-events: none;
}
@keyframes ripple {
    to {
        transform: scale(4);
        opacity: 0;
    }
}

/* Hero */
.hero {
    padding: 160px 0 96px;
    text-align: center;
    background: linear-gradient(180deg, var(--color-gray-50), white);
}
.hero-title { font-size: 3.5rem; line-height: 1.1; margin: 0 auto var(--spacing-4); max-width: 800px; }
.hero-subtitle { font-size: 1.25rem; color: var(--color-gray-500); max-width: 640px; margin: 0 auto var(--spacing-8); }
.hero-buttons { display: flex; justify-content: center; gap: var(--spacing-4); margin-bottom: 64px; }

/* Dashboard preview */
.dashboard-preview {
    display: grid;
    grid-template-columns: 200px 1fr;
    text-align: left;
    border: 1px solid var(--color-gray-200);
    border-radius: 12px;
    overflow: hidden;
    box-shadow: 0 20px 40px rgb(0 0 0 / 0.08);
}
.dashboard-sidebar { background: var(--color-gray-50); padding: var(--spacing-4) var(--spacing-2); }
.nav-item {
    display: flex;
    gap: var(--spacing-2);
    padding: 6px 10px;
    border-radius: 6px;
    cursor: pointer;
    color: var(--color-gray-500);
}
.nav-item:hover { background: var(--color-gray-100); }
.nav-item.active { background: var(--color-gray-200); color: var(--color-gray-900); font-weight: 500; }
.dashboard-header { padding: var(--spacing-4); font-weight: 600; border-bottom: 1px solid var(--color-gray-200); }
.issue-item {
    display: grid;
    grid-template-columns: 16px 80px 1fr auto;
    align-items: center;
    gap: var(--spacing-4);
    padding: 10px var(--spacing-4);
    border-bottom: 1px solid var(--color-gray-100);
    cursor: pointer;
    transition: transform var(--transition-fast);
}
.issue-status { width: 12px; height: 12px; border-radius: 50%; border: 2px solid var(--color-gray-500); }
.issue-status.in-progress { border-color: #f2c94c; }
.issue-status.in-review { border-color: #26b5ce; }
.issue-status.done { background: var(--color-primary); border-color: var(--color-primary); }
.issue-key { color: var(--color-gray-500); font-size: 0.85rem; }
.issue-priority { color: var(--color-gray-500); font-size: 0.85rem; }

/* Sections */
.features, .pricing { padding: 96px 0; }
.section-header { text-align: center; margin-bottom: 48px; }
.section-title { font-size: 2.25rem; margin: 0 0 var(--spacing-2); }
.section-subtitle { color: var(--color-gray-500); margin: 0; }

.features-grid, .pricing-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 24px;
}
.feature-card, .pricing-card {
    padding: 24px;
    border: 1px solid var(--color-gray-200);
    border-radius: 12px;
    background: white;
}
.feature-icon { font-size: 1.5rem; margin-bottom: var(--spacing-4); }
.feature-title { margin: 0 0 var(--spacing-2); }
.feature-description { margin: 0; color: var(--color-gray-500); }

.pricing-card { cursor: pointer; display: flex; flex-direction: column; gap: var(--spacing-4); }
.pricing-card.featured { border-color: var(--color-primary); }
.pricing-card.selected { box-shadow: 0 0 0 2px var(--color-primary); }
.pricing-name { margin: 0; }
.price-amount { font-size: 2.5rem; font-weight: 700; }
.price-period { color: var(--color-gray-500); margin-left: var(--spacing-2); }
.pricing-blurb { color: var(--color-gray-500); margin: 0; }
.pricing-perks { margin: 0; padding-left: 1.2rem; flex: 1; }

/* Call to action */
.cta { padding: 96px 0; text-align: center; background: var(--color-gray-900); color: white; }
.cta-title { font-size: 2.5rem; margin: 0 0 var(--spacing-4); }
.cta-subtitle { color: var(--color-gray-200); margin: 0 0 var(--spacing-8); }
.cta-form { max-width: 360px; margin: 0 auto var(--spacing-8); }
.cta-email {
    width: 100%;
    padding: 12px;
    border-radius: var(--radius);
    border: 1px solid var(--color-gray-500);
    font: inherit;
}
.cta-email.invalid { border-color: #eb5757; }
.cta-hint { color: #eb5757; font-size: 0.85rem; margin: var(--spacing-2) 0 0; }
.cta-buttons { display: flex; justify-content: center; gap: var(--spacing-4); }

.footer { padding: var(--spacing-8) 0; border-top: 1px solid var(--color-gray-200); }
.footer .container { display: flex; justify-content: space-between; color: var(--color-gray-500); }
.footer-brand { font-weight: 600; color: var(--color-gray-900); }

.mobile-menu-toggle { display: none; }

@media (max-width: 768px) {
    .nav-menu {
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: white;
        border-top: 1px solid var(--color-gray-200);
        flex-direction: column;
        padding: var(--spacing-4);
        transform: translateY(-100%);
        opacity: 0;
        visibility: hidden;
        transition: all var(--transition-normal);
    }

    .nav-menu.mobile-open {
        transform: translateY(0);
        opacity: 1;
        visibility: visible;
    }

    .mobile-menu-toggle {
        display: block;
    }

    .nav-actions { display: none; }
    .hero-title { font-size: 2.25rem; }
    .dashboard-preview { grid-template-columns: 1fr; }
    .dashboard-sidebar { display: none; }
}

@media (min-width: 769px) {
    .mobile-menu-toggle {
        display: none;
    }
}
"#;
