//! Curated audit outcomes keyed by check id.
//!
//! Results captured from a local production test run plus code inspection.
//! Any check not listed here defaults to [`Status::Nt`] in the generated
//! report. This table is data, not logic: edit entries in place, keep the
//! category grouping.

use crate::audit::tools::model::Status;
use crate::audit::tools::model::Status::{Fail, Na, Nt, Partial, Pass};

/// Outcome recorded for a single check identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultEntry {
    pub status: Status,
    pub notes: &'static str,
}

const fn entry(status: Status, notes: &'static str) -> ResultEntry {
    ResultEntry { status, notes }
}

/// Looks up the curated outcome for a check id. Ids present here but absent
/// from the checklist document are silently unused.
pub fn lookup(id: &str) -> Option<ResultEntry> {
    RESULTS
        .iter()
        .find(|(check_id, _)| *check_id == id)
        .map(|(_, result)| *result)
}

/// Curated outcomes, grouped by checklist category, in curated order.
pub const RESULTS: &[(&str, ResultEntry)] = &[
    // Crawlability & Indexation
    ("C-001", entry(Pass, "Verified /robots.txt returns 200.")),
    ("C-002", entry(Partial, "robots.txt blocks only non-existent/removed transactional paths; verify per-store additions.")),
    ("C-003", entry(Pass, "robots.txt references /sitemap.xml.")),
    ("C-005", entry(Nt, "Requires environment-specific rules (staging/test).")),
    ("C-008", entry(Pass, "Verified /sitemap.xml returns 200.")),
    ("C-009", entry(Pass, "Sitemap is well-formed XML via next-sitemap.")),
    ("C-010", entry(Partial, "Sitemap includes key static + dynamic entities; full coverage depends on CMS + routing.")),
    ("C-011", entry(Pass, "Search is noindex and excluded from sitemap; transactional/auth routes excluded.")),
    ("C-012", entry(Pass, "Template does not define application-level redirects; verify infra/CDN redirects separately.")),
    ("C-013", entry(Partial, "Spot-checked key URLs; full validation requires crawling all sitemap URLs.")),
    ("C-014", entry(Pass, "Sitemap locs match canonical host derived from NEXT_PUBLIC_SITE_URL.")),
    ("C-019", entry(Pass, "Product URLs included.")),
    ("C-020", entry(Pass, "Category URLs included.")),
    ("C-021", entry(Pass, "Blog URLs included.")),
    ("C-022", entry(Pass, "Cart/checkout/order/account not present in sitemap.")),
    ("C-023", entry(Na, "Auth removed from Basic Template.")),
    ("C-024", entry(Na, "Account area removed from Basic Template.")),
    ("C-025", entry(Pass, "Indexable pages rely on default index,follow (no meta robots) unless explicitly set.")),
    ("C-026", entry(Na, "Cart removed.")),
    ("C-027", entry(Na, "Checkout removed.")),
    ("C-028", entry(Na, "Account removed.")),
    ("C-029", entry(Na, "Order confirmation removed.")),
    ("C-030", entry(Pass, "/search sets robots noindex,follow.")),
    ("C-031", entry(Nt, "Needs explicit policy for filtered/sorted URLs (noindex vs canonical).")),
    ("C-032", entry(Nt, "Pagination is \"load more\"; audit expects canonical/prev/next strategy if using paginated URLs.")),
    ("C-034", entry(Na, "Payment callback pages removed.")),
    ("C-035", entry(Partial, "Canonical tags verified on key routes; confirm all CMS-driven routes.")),
    ("C-036", entry(Pass, "Key routes use self-referencing canonicals.")),
    ("C-037", entry(Pass, "Canonicals are absolute URLs derived from NEXT_PUBLIC_SITE_URL.")),
    ("C-038", entry(Pass, "metadataBase set in src/app/layout.tsx.")),
    ("C-039", entry(Nt, "Depends on NEXT_PUBLIC_SITE_URL being https in production.")),
    ("C-040", entry(Nt, "Depends on NEXT_PUBLIC_SITE_URL and infrastructure (www vs non-www).")),
    ("C-041", entry(Pass, "Canonicals strip trailing slash consistently.")),
    ("C-042", entry(Pass, "Search canonicals drop query; filtered/sorted policy still needs decision.")),
    ("C-043", entry(Nt, "No rel prev/next; depends on pagination URL strategy.")),
    ("C-044", entry(Nt, "Needs explicit canonical/noindex handling for facet URLs.")),
    ("C-045", entry(Nt, "Requires duplicate URL inventory.")),
    // Redirects: intentionally removed in template
    ("C-046", entry(Na, "Redirects intentionally removed; handled per storefront.")),
    ("C-047", entry(Na, "Redirects intentionally removed; handled per storefront.")),
    ("C-048", entry(Na, "Redirects intentionally removed; handled per storefront.")),
    ("C-049", entry(Na, "Redirects intentionally removed; handled per storefront.")),
    ("C-050", entry(Nt, "HTTP->HTTPS is infrastructure-level (CDN/hosting) concern.")),
    ("C-051", entry(Nt, "www/non-www is infrastructure-level (CDN/hosting) concern.")),
    // URL Structure & Architecture
    ("U-001", entry(Pass, "URLs are readable slugs (category/product/blog).")),
    ("U-002", entry(Pass, "Slugs use hyphens.")),
    ("U-003", entry(Pass, "Routes are lowercase.")),
    ("U-005", entry(Partial, "Depends on content/slug conventions in Saleor/PartsLogic.")),
    ("U-006", entry(Pass, "No session IDs observed.")),
    ("U-007", entry(Partial, "Search uses query params; indexability controlled via noindex.")),
    ("U-008", entry(Pass, "Consistent /product/, /category/, /blog/, /brand/ patterns.")),
    ("U-009", entry(Pass, "Product pages use slug in /product/{slug}.")),
    ("U-010", entry(Pass, "Category pages use slug in /category/{slug}.")),
    ("U-011", entry(Pass, "Blog uses /blog/{slug}.")),
    ("U-012", entry(Partial, "Navigation exists; click-depth depends on menu config in Saleor.")),
    ("U-013", entry(Pass, "Logical hierarchy for core entities.")),
    ("U-014", entry(Pass, "Products are flat URLs.")),
    ("U-015", entry(Nt, "Requires crawl of internal links.")),
    ("U-016", entry(Pass, "Header/footer navigation present.")),
    ("U-017", entry(Pass, "Breadcrumbs present on category/blog/static pages; PDP breadcrumb is via schema, visible breadcrumb varies.")),
    ("U-018", entry(Partial, "Depends on Saleor category tree.")),
    ("U-019", entry(Nt, "Facet URLs policy not fully defined.")),
    // On-Page SEO Elements (sampled)
    ("O-001", entry(Partial, "Titles present on key routes; full uniqueness requires crawl.")),
    ("O-005", entry(Nt, "Requires crawl to detect duplicates.")),
    ("O-007", entry(Pass, "PDP title includes product name.")),
    ("O-008", entry(Pass, "Category title includes category name.")),
    ("O-009", entry(Pass, "Homepage title set to store name.")),
    ("O-010", entry(Pass, "generateMetadata used for PDP/category/blog dynamic pages.")),
    ("O-019", entry(Fail, "Not all key pages have exactly one visible H1 (e.g. /products/all, /product/{slug}, /contact, /locator).")),
    ("O-024", entry(Partial, "Most headings use semantic components; verify Heading defaults to h1 where required.")),
    ("O-026", entry(Fail, "PDP H1 missing in server-rendered HTML (observed h1_count=0).")),
    ("O-027", entry(Pass, "Category pages include an H1 (sampled /category/products).")),
    ("O-034", entry(Partial, "Many images have alt; full coverage requires crawl.")),
    ("O-040", entry(Nt, "Requires crawl of all templates/components.")),
    ("O-043", entry(Nt, "Requires link crawl.")),
    // Technical SEO
    ("T-001", entry(Fail, "Several core pages render with Suspense fallbacks / client-only sections; verify no-JS content.")),
    ("T-002", entry(Fail, "Without JS, many pages show skeleton/placeholder content.")),
    ("T-003", entry(Fail, "SEO-critical content is often client-rendered (BAILOUT_TO_CLIENT_SIDE_RENDERING markers observed).")),
    ("T-004", entry(Partial, "Mix of server/client components; needs systematic review.")),
    ("T-005", entry(Partial, "Interactivity is client; some content also client.")),
    ("T-006", entry(Nt, "Needs browser console to confirm hydration errors.")),
    ("T-007", entry(Nt, "Needs Lighthouse/trace to confirm render-blocking JS.")),
    ("T-008", entry(Pass, "Key pages return 200.")),
    ("T-009", entry(Pass, "Unknown /{slug} now returns 404 (fixed).")),
    ("T-010", entry(Pass, "Custom 404 page exists (app/_not-found).")),
    ("T-011", entry(Nt, "Requires provoking backend errors.")),
    ("T-012", entry(Partial, "Primary soft-404 source (/[slug]) fixed; still needs crawl for other soft-404 patterns.")),
    ("T-013", entry(Nt, "Out-of-stock handling depends on data and UI; requires manual verification.")),
    ("T-014", entry(Partial, "next/image used widely; some components still use <img>.")),
    ("T-018", entry(Pass, "Next production build outputs minified JS.")),
    ("T-019", entry(Pass, "CSS is bundled/minified in production build.")),
    ("T-020", entry(Nt, "Compression depends on hosting/CDN.")),
    ("T-021", entry(Nt, "Caching headers depend on hosting/CDN; Next sets some cache headers.")),
    ("T-024", entry(Partial, "Some third-party scripts are conditional; needs full inventory.")),
    ("T-025", entry(Pass, "Many pages are prerendered (see next build output).")),
    ("T-026", entry(Partial, "Some pages use ISR revalidate; strategy may need tuning per route.")),
    ("T-027", entry(Pass, "No global force-dynamic except CMS dynamic slug route.")),
    // Core Web Vitals
    ("P-001", entry(Nt, "Requires Lighthouse/CrUX.")),
    ("P-002", entry(Partial, "Hero uses next/image; overall LCP requires measurement.")),
    ("P-006", entry(Pass, "Fonts use display: swap (next/font).")),
    ("P-008", entry(Nt, "Requires field/lab measurement.")),
    ("P-013", entry(Nt, "Requires measurement.")),
    ("P-014", entry(Partial, "next/image sets dimensions; verify remaining <img>.")),
    // Structured Data & Schema
    ("S-001", entry(Pass, "Organization JSON-LD present on homepage.")),
    ("S-002", entry(Fail, "Organization schema is not injected site-wide (homepage only).")),
    ("S-003", entry(Pass, "WebSite schema with SearchAction present on homepage.")),
    ("S-007", entry(Pass, "Product JSON-LD present on PDP (sampled).")),
    ("S-008", entry(Pass, "Product name present.")),
    ("S-009", entry(Pass, "Product description present (but may be JSON-like; validate for Rich Results).")),
    ("S-010", entry(Pass, "Product image present.")),
    ("S-011", entry(Pass, "Price present.")),
    ("S-012", entry(Pass, "Currency present.")),
    ("S-013", entry(Pass, "Availability present.")),
    ("S-019", entry(Pass, "Offer nested in Product.")),
    ("S-021", entry(Partial, "BreadcrumbList present on many pages (PDP/category/blog), not guaranteed everywhere.")),
    ("S-027", entry(Pass, "BlogPosting schema present on blog posts (sampled).")),
    ("S-031", entry(Nt, "Requires Google Rich Results Test.")),
    ("S-032", entry(Nt, "Requires Search Console.")),
    ("S-034", entry(Pass, "JSON-LD used.")),
    // Content & E-E-A-T
    ("E-011", entry(Pass, "Contact info present in footer/header (sampled).")),
    ("E-014", entry(Pass, "Privacy policy page exists.")),
    ("E-016", entry(Pass, "Shipping & Returns page exists.")),
    // E-commerce Specific SEO
    ("EC-004", entry(Partial, "Price shown on product cards/schema; verify PDP UI renders without JS.")),
    ("EC-005", entry(Partial, "Availability in schema; UI depends on client render.")),
    ("EC-006", entry(Na, "Add to cart intentionally removed; replaced by Request a Quote.")),
    ("EC-019", entry(Pass, "Search endpoint works; /search is functional.")),
    ("EC-027", entry(Pass, "PartsLogic fitment root-types endpoint responds 200 via proxy.")),
    ("EC-028", entry(Nt, "Fitment accuracy requires domain validation.")),
    // Security & Trust
    ("SEC-001", entry(Nt, "Template supports HTTPS; depends on deployment.")),
    ("SEC-002", entry(Nt, "Depends on deployment certificate.")),
    ("SEC-003", entry(Nt, "Requires browser audit.")),
    ("SEC-004", entry(Nt, "HSTS is hosting/CDN config.")),
    // Social & Sharing
    ("SOC-001", entry(Pass, "og:title present on key pages.")),
    ("SOC-002", entry(Pass, "og:description present on key pages.")),
    ("SOC-003", entry(Pass, "og:image present on key pages (added defaults).")),
    ("SOC-004", entry(Pass, "og:url present on key pages.")),
    ("SOC-009", entry(Pass, "twitter:card present on key pages.")),
    ("SOC-010", entry(Pass, "twitter:title present on key pages.")),
    ("SOC-011", entry(Pass, "twitter:description present on key pages.")),
    ("SOC-012", entry(Pass, "twitter:image present on key pages (added defaults).")),
    // Analytics & Monitoring
    ("A-001", entry(Nt, "Optional; requires GA config in Saleor/env.")),
    ("A-006", entry(Nt, "Requires GSC verification.")),
    ("A-007", entry(Nt, "Requires GSC submission.")),
    ("A-008", entry(Nt, "Requires GSC access.")),
];
