//! Canned summary templates for degraded generation.
//!
//! When the language-model provider is unconfigured or its call fails, a
//! template is selected by testing the lowercased question against a fixed
//! table of keyword rules, evaluated in priority order. The dispatch is a
//! data structure rather than a conditional chain so the fallback behavior
//! can be tested exhaustively.
//!
//! Each template embeds its own bracket markers referencing the supplied
//! documents; citation extraction runs over the rendered text exactly as it
//! does for model output.

use lawbridge_core::RetrievedDocument;

/// Characters of the top document embedded by the generic template.
const GENERIC_EXCERPT_CHARS: usize = 500;

/// A keyword-dispatched template. The first rule whose keyword set
/// intersects the lowercased question wins.
struct TemplateRule {
    keywords: &'static [&'static str],
    render: fn(&[RetrievedDocument]) -> String,
}

/// Rules in fixed priority order. More specific topics come first so that
/// a question like "my landlord won't let me break my lease" resolves to
/// the tenant template, matching how questions skew in practice.
static TEMPLATE_RULES: &[TemplateRule] = &[
    TemplateRule {
        keywords: &["tenant", "rent", "landlord"],
        render: tenant_rights_template,
    },
    TemplateRule {
        keywords: &["lease", "break"],
        render: lease_break_template,
    },
    TemplateRule {
        keywords: &["force majeure"],
        render: force_majeure_template,
    },
    TemplateRule {
        keywords: &["wrongful", "termination", "fired"],
        render: wrongful_termination_template,
    },
    TemplateRule {
        keywords: &["small claims"],
        render: small_claims_template,
    },
    TemplateRule {
        keywords: &["copyright", "intellectual property", "infringement"],
        render: copyright_template,
    },
    TemplateRule {
        keywords: &["contract", "agreement"],
        render: contract_template,
    },
];

/// Select and render the degraded-path summary for a question.
///
/// Falls through to a generic template built around the top retrieved
/// document when no keyword rule matches. Always returns non-empty text.
pub fn select_template(question: &str, documents: &[RetrievedDocument]) -> String {
    let lower_question = question.to_lowercase();

    for rule in TEMPLATE_RULES {
        if rule
            .keywords
            .iter()
            .any(|keyword| lower_question.contains(keyword))
        {
            return (rule.render)(documents);
        }
    }

    generic_template(documents)
}

fn tenant_rights_template(_documents: &[RetrievedDocument]) -> String {
    r#"As a tenant, you have important legal protections. You have the right to live in a safe, habitable dwelling with working utilities and proper maintenance [1]. Your landlord must give you proper notice (usually 24-48 hours) before entering your rental unit, except in emergencies [1].

You're also protected against discrimination under the Fair Housing Act, which prohibits landlords from treating you differently based on race, religion, sex, national origin, disability, or family status [2].

If you're having issues with your landlord, document everything in writing. If your landlord isn't maintaining the property or is violating your rights, you may have legal remedies available including rent withholding (in some states), repair and deduct options, or filing a complaint with your local housing authority.

Remember: This is general legal information, not legal advice. For your specific situation, consider consulting with a local tenant rights organization or attorney."#.to_string()
}

fn lease_break_template(_documents: &[RetrievedDocument]) -> String {
    r#"Breaking a lease early can have legal and financial consequences, but there are situations where you may be legally justified in doing so [1].

You may be able to break your lease without penalty if: you're called to active military duty (protected by the SCRA), you're a victim of domestic violence (in many states), your rental unit is uninhabitable and the landlord won't fix it, or your landlord is harassing you or violating the lease terms [1].

If you don't have legal justification, you may still owe rent for the remaining lease term. However, most states require landlords to make reasonable efforts to re-rent the unit (called "mitigating damages"), which could reduce what you owe [1].

Check your lease for an early termination clause - some leases allow you to leave early if you pay a fee (usually 1-2 months' rent).

Remember: This is general legal information, not legal advice. Consult with a local attorney or tenant rights organization for guidance on your specific situation."#.to_string()
}

fn force_majeure_template(_documents: &[RetrievedDocument]) -> String {
    r#"Force majeure (pronounced "forse ma-ZHUR") is a French term meaning "superior force." It's a legal clause in contracts that excuses parties from fulfilling their obligations when extraordinary events beyond their control make performance impossible or impractical [1].

Common force majeure events include: natural disasters (earthquakes, floods, hurricanes), acts of war or terrorism, government actions (quarantines, embargoes), pandemics, and major strikes or civil unrest [1].

Important things to know:
- Force majeure must usually be specifically written into your contract - it's not automatic
- Courts interpret these clauses narrowly, so the event must typically be listed or similar to listed events
- The COVID-19 pandemic led to many force majeure disputes, with outcomes depending on specific contract language

If you're dealing with a force majeure situation, carefully review your contract's exact wording and consider consulting with a contract attorney.

Remember: This is general legal information, not legal advice tailored to your situation."#.to_string()
}

fn wrongful_termination_template(_documents: &[RetrievedDocument]) -> String {
    r#"Wrongful termination occurs when an employer fires an employee for illegal reasons, even in "at-will" employment states where either party can normally end employment at any time [1].

Your termination may be wrongful if you were fired because of: your race, sex, age (40+), religion, disability, or national origin (discrimination); reporting illegal activity or safety violations (whistleblower retaliation); filing a workers' comp claim or taking FMLA leave; or voting, serving on jury duty, or exercising other legal rights [1].

To build a case, document: the timeline of events, any discriminatory comments or treatment, whether others in similar situations were treated differently, and any evidence of the real reason for your termination.

If you believe you were wrongfully terminated, consider filing a complaint with the EEOC (for discrimination) or consulting with an employment attorney. Many offer free consultations for wrongful termination cases [1].

Remember: This is general legal information, not legal advice. An employment attorney can evaluate your specific situation."#.to_string()
}

fn small_claims_template(_documents: &[RetrievedDocument]) -> String {
    r#"Small claims court is designed to help people resolve disputes over relatively small amounts of money without needing a lawyer [1].

Here's how it works:
1. File your claim at the courthouse and pay the filing fee (usually $30-$100)
2. The court will give you a hearing date and paperwork to "serve" (deliver) to the person you're suing
3. At your hearing, both sides present their case to a judge
4. The judge usually decides on the spot

To prepare your case: bring all relevant documents (contracts, receipts, photos, text messages, emails), organize them chronologically, and practice explaining your case clearly and briefly [1].

Dollar limits vary by state - typically $2,500 to $25,000. You can sue for more but will only recover up to the limit.

If you win, you may need to take additional steps to collect your judgment if the other party doesn't pay voluntarily.

Remember: This is general information about small claims court. Rules vary by state and locality."#.to_string()
}

fn copyright_template(_documents: &[RetrievedDocument]) -> String {
    r#"Copyright protects original creative works (writing, music, art, software, photos) automatically from the moment they're created and fixed in a tangible form - you don't have to register to own the copyright, though registration is required before you can sue for infringement [1].

If someone is using your work without permission, your options include: sending a cease-and-desist letter, filing a DMCA takedown notice with the website or platform hosting the content, or suing for infringement (registration required, and statutory damages are only available if you registered before the infringement or within three months of publication) [1].

If you're the one accused of infringement, "fair use" may protect limited uses for commentary, criticism, news reporting, teaching, or parody. Fair use is decided case by case based on the purpose of the use, the nature of the work, how much was taken, and the effect on the market for the original [1].

Trademarks (brand names, logos) and patents (inventions) are separate forms of intellectual property with their own registration systems and rules.

Remember: This is general legal information, not legal advice. For a real dispute, consult an intellectual property attorney."#.to_string()
}

fn contract_template(_documents: &[RetrievedDocument]) -> String {
    r#"A contract is a legally enforceable agreement. To be valid, it generally needs: an offer, acceptance of that offer, consideration (each side gives something of value), capacity (the parties are adults of sound mind), and a legal purpose [1].

Contracts can be written or spoken, but some must be in writing to be enforceable (under the "Statute of Frauds") - including real estate deals, agreements that take more than a year to perform, and sales of goods over $500 [1].

If the other party breaks the agreement, your main remedies are: damages (money to put you where you'd have been if the contract was performed), specific performance (a court order to actually do the thing, used for unique items like real estate), or rescission (undoing the contract) [1].

Before signing anything: read the entire document, make sure every promise you're relying on is written down, and keep a copy. Verbal side promises are very hard to enforce.

Remember: This is general legal information, not legal advice. Have an attorney review any significant contract before you sign it."#.to_string()
}

fn generic_template(documents: &[RetrievedDocument]) -> String {
    let excerpt = documents
        .first()
        .map(|doc| {
            let mut excerpt: String = doc.content.chars().take(GENERIC_EXCERPT_CHARS).collect();
            excerpt.push_str("...");
            excerpt
        })
        .unwrap_or_else(|| "Your question touches on an important legal area.".to_string());

    format!(
        r#"Based on the legal information available, here's what you should know about your question:

{excerpt} [1]

Key points to consider:
- Legal rights and obligations vary significantly by state and specific circumstances
- Documentation is crucial in any legal matter - keep records of all relevant communications and events
- Time limits (statutes of limitations) apply to many legal actions, so don't delay if you need to take action

For a complete answer tailored to your situation, I recommend:
1. Consulting with a licensed attorney in your jurisdiction
2. Contacting your local legal aid organization if you need free or low-cost assistance
3. Checking your state's official legal resources for specific laws

Remember: This is general legal information for educational purposes only. It is not a substitute for professional legal advice."#
    )
}
