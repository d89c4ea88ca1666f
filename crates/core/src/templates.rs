//! Canned answers and the excerpt/summary layouts.
//!
//! Figures in these blocks are the organization's published policy values and
//! are reproduced verbatim.

use serde::Serialize;

/// Hand-authored answers selected by the rule cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    HealthInsurance,
    AnnualLeave,
    SickLeave,
    LeaveBreakdown,
    BenefitsPackage,
    WorkFromHome,
    Resignation,
    Maternity,
    Probation,
    CarryForward,
}

impl Template {
    pub fn text(self) -> &'static str {
        match self {
            Template::HealthInsurance => HEALTH_INSURANCE,
            Template::AnnualLeave => ANNUAL_LEAVE,
            Template::SickLeave => SICK_LEAVE,
            Template::LeaveBreakdown => LEAVE_BREAKDOWN,
            Template::BenefitsPackage => BENEFITS_PACKAGE,
            Template::WorkFromHome => WORK_FROM_HOME,
            Template::Resignation => RESIGNATION,
            Template::Maternity => MATERNITY,
            Template::Probation => PROBATION,
            Template::CarryForward => CARRY_FORWARD,
        }
    }
}

/// Footer variants for answers summarized from a matched section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    /// "How many / how much" style questions.
    Quantity,
    /// "Can I / am I allowed" style questions.
    Permission,
}

/// Non-blank lines of `section` that are not header lines, capped at `limit`.
pub fn body_lines<'a>(section: &'a str, header_marker: &str, limit: usize) -> Vec<&'a str> {
    section
        .split('\n')
        .filter(|line| !line.trim().is_empty() && !line.starts_with(header_marker))
        .take(limit)
        .collect()
}

/// Numbered list, one suggestion per line, each line newline-terminated.
pub fn numbered(items: &[&str]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}\n", i + 1, item))
        .collect()
}

pub fn summary(kind: SummaryKind, lines: &[&str], source: &str) -> String {
    let summary = lines.join("\n");
    match kind {
        SummaryKind::Quantity => format!(
            r#"**Based on HR Policies:**

{summary}

**Need more details?** Try asking more specifically!

📚 **Source:** {source}

💡 **Related Questions:**

1. What are all the leave types?
2. What benefits do I get?
3. How do I apply for this?"#
        ),
        SummaryKind::Permission => format!(
            r#"**Based on HR Policies:**

{summary}

For specific permissions, please:
- 📧 Contact HR: hr@rooman.net
- 💬 Discuss with your manager
- 📖 Check HRMS portal for detailed policy

📚 **Source:** {source}

💡 **Related Questions:**

1. What's the general policy on this?
2. Who do I need approval from?
3. Are there any exceptions?"#
        ),
    }
}

pub fn excerpt(lines: &[&str], source: &str, suggestions: &[&str]) -> String {
    let summary = lines.join("\n\n");
    let suggestions = format!(
        "\n💡 **You might also want to know:**\n\n{}",
        numbered(suggestions)
    );
    format!(
        r#"**From Our HR Policies:**

{summary}

**For More Information:**
- 📧 Contact: hr@rooman.net
- 💬 Book HR consultation
- 📖 HRMS portal

📚 **Source:** {source}

{suggestions}"#
    )
}

pub fn fallback(suggestions: &[&str]) -> String {
    let suggestions = numbered(suggestions);
    format!(
        r#"**I can help you with HR policy questions!**

Based on your query, here are some specific questions I can answer:

**💬 Try These:**
{suggestions}
**Common Topics:**
- 📅 **Leaves:** Annual, sick, casual, maternity, paternity
- 🏥 **Benefits:** Health insurance, PF, bonuses, allowances
- 🏠 **Policies:** WFH, notice period, probation, resignation
- 💰 **Compensation:** Salary structure, increments, ESOP

**Pro Tip:** Ask specific questions like:
- "How many annual leaves do I get?"
- "What's the health insurance sum insured?"
- "Can I work from home 2 days a week?"

📧 **Need personalized help?** Contact hr@rooman.net

📚 **Source:** HR Policy Documents"#
    )
}

const HEALTH_INSURANCE: &str = r#"**Health Insurance Coverage:**

🏥 **Comprehensive Family Coverage**

**Who's Covered:**
- Employee + Spouse + 2 Children + Parents

**Coverage Amount:**
- Sum Insured: **₹5,00,000** per family/year
- OPD Coverage: **₹25,000**/year
- Maternity: **₹75,000**/delivery

**Additional Benefits:**
- 🏥 10,000+ cashless hospitals across India
- 📋 Annual health checkup (₹3,000 value)
- 💊 Pre-existing conditions covered after 3 years
- 🚑 Ambulance: ₹2,000/emergency

**How to Use:**
1. Show health card at network hospitals
2. Cashless treatment approved within 2 hours
3. For non-network, submit reimbursement within 30 days

📚 **Source:** Benefits Policy

💡 **Related Questions:**

1. What other benefits do employees get?
2. How do I add my family members?
3. What's the claim process?"#;

const ANNUAL_LEAVE: &str = r#"**Annual Leave Entitlement:**

📅 **24 days** of paid annual leave per year

**Key Details:**
- Accrues at **2 days per month** of service
- Carry forward: Up to **12 days** to next year
- Advance notice: **5 working days** required
- During probation: **6 days** available (first 6 months)

**How to Apply:**
1. Submit via HRMS portal
2. Manager reviews within 48 hours
3. Automatic email confirmation

**Pro Tips:**
- ✅ Plan in advance for better approval chances
- ✅ Combine with weekends for longer breaks
- ✅ Use carry-forward wisely before year-end

📚 **Source:** Leave Policy 2024

💡 **Related Questions:**

1. Can I carry forward unused leaves?
2. What if I need emergency leave?
3. How do I apply in HRMS?"#;

const SICK_LEAVE: &str = r#"**Sick Leave Entitlement:**

🏥 **12 days** of paid sick leave per year

**Important Points:**
- Does NOT carry forward to next year
- Medical certificate needed for **3+ consecutive days**
- Must inform manager within **2 hours** of shift start
- Can be taken on short notice (with intimation)

**When You're Sick:**
1. Inform manager ASAP (within 2 hours)
2. Mark leave in HRMS
3. Submit medical cert if 3+ days
4. Update team on urgent tasks

📚 **Source:** Leave Policy 2024

💡 **Related Questions:**

1. What if I'm chronically ill?
2. Can I combine sick + annual leave?
3. What about work from home when sick?"#;

const LEAVE_BREAKDOWN: &str = r#"**Complete Leave Entitlement:**

📊 **Your Annual Leave Breakdown:**

**Paid Leaves:**
- 📅 **Annual Leave:** 24 days/year (carry forward 12 days max)
- 🏥 **Sick Leave:** 12 days/year (no carry forward)
- 📋 **Casual Leave:** 10 days/year (no carry forward)
- **Total:** 46 days/year

**Special Leaves:**
- 🤰 **Maternity:** 26 weeks (182 days)
- 👨‍👶 **Paternity:** 15 days
- 😢 **Bereavement:** 3-5 days (based on relationship)
- 📚 **Study Leave:** Up to 10 days/year

**Work from Home:**
- 🏠 2 days/week post-probation
- Requires 24-hour advance approval

💡 **Use the Leave Calculator tab** to see your current balance!

📚 **Source:** Leave Policy 2024

💡 **Related Questions:**

1. How do I calculate my current leave balance?
2. Can I take leave during probation?
3. What's the approval process?"#;

const BENEFITS_PACKAGE: &str = r#"**Complete Employee Benefits Package:**

💰 **Financial Benefits:**
- 🏦 **Provident Fund:** 12% employer + 12% employee
- 💎 **Gratuity:** After 5 years (formula: salary × years × 15/26)
- 🎁 **Performance Bonus:** 0-20% of CTC based on rating
- 📈 **ESOP:** For L4+ after 1 year (4-year vesting)

**Insurance Coverage:**
- 🏥 **Health:** ₹5L family coverage, 10,000+ hospitals
- 💼 **Life:** 3x annual CTC
- 🚑 **Accidental:** 4x annual CTC
- 💊 **Critical Illness:** ₹10L coverage

**Monthly Allowances:**
- 🍔 Meal coupons: ₹2,500
- ⛽ Fuel: ₹3,000
- 📱 Mobile: ₹1,500
- 🌐 Internet (WFH): ₹1,000

**Learning & Development:**
- 📚 Annual budget: ₹25,000/employee
- 🎓 Certification reimbursement: 100%
- 📊 Conferences: 2/year

**Wellness Benefits:**
- 🏋️ Gym reimbursement: ₹12,000/year
- 🧘 Mental health counseling: 6 free sessions
- 💉 Annual health checkup + flu shots

**Family Support:**
- 🤰 Maternity: 26 weeks paid + ₹75K coverage
- 👨‍👶 Paternity: 15 days paid
- 👶 Crèche facility on campus
- 📖 Child education: ₹30,000/year

📚 **Source:** Benefits Policy

💡 **Related Questions:**

1. How do I claim these benefits?
2. When do I become eligible for ESOP?
3. What's the PF contribution breakdown?"#;

const WORK_FROM_HOME: &str = r#"**Work From Home (WFH) Policy:**

🏠 **Flexible Work Options**

**Hybrid Model (Standard):**
- ✅ **2 days WFH** + **3 days office** per week
- Available after probation period
- Requires **24 hours advance approval** via HRMS
- Manager has discretion based on project needs

**Full Remote:**
- Special circumstances only (medical, relocation)
- Requires VP approval
- Must justify business case

**WFH Benefits Provided:**
- 💻 Company laptop with VPN access
- 💰 ₹1,000/month internet reimbursement
- 🪑 One-time home office setup: ₹10,000

**When WFH Not Allowed:**
- ❌ Critical project milestones
- ❌ Client meetings/presentations
- ❌ Team collaboration days
- ❌ During probation period

**Best Practices:**
- 🟢 Stay available during core hours (11 AM - 4 PM)
- 📞 Respond to messages within 15 minutes
- 📹 Camera on for team meetings
- 📊 Daily standup attendance mandatory

📚 **Source:** Workplace Policy - Remote Work

💡 **Related Questions:**

1. How do I request WFH days?
2. Can I work from another city?
3. What equipment is provided?"#;

const RESIGNATION: &str = r#"**Resignation & Notice Period:**

⏰ **Notice Period Requirements:**

**By Employment Status:**
- **Confirmed Employees:** 60 days
- **Senior Roles (Manager+):** 90 days  
- **During Probation:** 30 days

**Buyout Option:**
- Available at company's discretion
- Cost: 1-2 months gross salary
- Must be requested in writing

**Resignation Process:**

1. **Week 1:**
   - Submit formal resignation letter to manager
   - HR initiates exit formalities
   - Manager assigns transition tasks

2. **Weeks 2-8:**
   - Knowledge transfer to team
   - Document handover
   - Complete pending projects

3. **Final Week:**
   - Asset return (laptop, ID, access cards)
   - Exit interview with HR
   - Handover checklist completion

**Full & Final Settlement:**
- Processed within **45 days** of last working day
- Includes: Pending salary, leave encashment, bonus (pro-rata)

**During Notice Period:**
- ❌ Cannot take leave (unless approved)
- ✅ Full attendance required
- ✅ Maintain professional conduct

**Certificate Provided:**
- Experience letter
- Relieving letter
- Salary certificate (on request)

📚 **Source:** Workplace Policy

💡 **Related Questions:**

1. Can I negotiate shorter notice period?
2. What if I have unused leaves?
3. How is F&F calculated?"#;

const MATERNITY: &str = r#"**Maternity Leave & Benefits:**

🤰 **Comprehensive Support for New Mothers**

**Leave Duration:**
- **26 weeks (182 days)** of fully paid maternity leave
- Can start **8 weeks before** expected delivery date
- **Adoptive mothers:** 12 weeks from adoption date

**Financial Benefits:**
- Full salary during entire leave period
- **₹75,000** maternity coverage in health insurance
- Hospital expenses covered under health insurance

**Additional Support:**
- 👶 **On-site crèche:** For 6 months - 5 years
- 📖 **Child education allowance:** ₹30,000/year
- 🏥 **Pre & post-natal checkups:** Covered in OPD

**Flexible Return Options:**
- Gradual return to work (part-time for 1 month)
- Extended WFH option for 3 months
- Nursing breaks: 2x 30-minute breaks/day (first 6 months)

**Requirements:**
- Medical documentation from registered practitioner
- Birth certificate submission within 30 days
- Update family details in HRMS

**Application Process:**
1. Inform manager at least 8 weeks before
2. Submit medical documents to HR
3. Plan handover with team
4. Complete HRMS formalities

📚 **Source:** Leave Policy & Benefits Policy

💡 **Related Questions:**

1. Can I extend maternity leave?
2. What about paternity leave for my spouse?
3. How do I enroll child in crèche?"#;

const PROBATION: &str = r#"**Probation Period Policy:**

⏱️ **What to Expect During Probation**

**Duration:**
- **6 months** for all new hires
- Can be extended by **3 months** if needed
- Rare cases: Early confirmation at 3 months for exceptional performance

**Performance Reviews:**
- **3-month review:** Mid-probation evaluation
- **6-month review:** Final confirmation decision
- Continuous feedback from manager

**During Probation:**
- Notice period: **30 days** (both sides)
- Leave allowance: Up to **6 days** (annual leave)
- Salary: 90% of confirmed CTC (10% held as retention)
- Benefits: Health insurance, PF start immediately

**Evaluation Criteria:**
- Technical competency
- Cultural fit
- Learning agility
- Team collaboration
- Attendance & punctuality

**Confirmation:**
- Based on satisfactory performance
- Letter issued within 1 week of completion
- 10% retention amount released
- Full benefits activated

**What Happens If Not Confirmed:**
- Extension by 3 months with improvement plan
- Or separation with 30-day notice
- Pro-rata benefits settled

📚 **Source:** Workplace Policy

💡 **Related Questions:**

1. What benefits do I get during probation?
2. Can I take leaves during probation?
3. How is performance evaluated?"#;

const CARRY_FORWARD: &str = r#"**Leave Carry Forward Rules:**

✅ **Annual Leave:** Up to **12 days** can be carried forward to next year

❌ **Sick Leave:** Cannot be carried forward (use it or lose it)

❌ **Casual Leave:** Cannot be carried forward

**Pro Tips:**
- 📅 Plan your annual leave to use at least 12 days each year
- 💡 Carry forward strategically for major plans next year
- ⚠️ Unused carry-forward expires if not used by June 30

📚 **Source:** Leave Policy 2024

💡 **Related Questions:**

1. What happens to unused leaves?
2. Can I encash my leaves?
3. How to plan leaves strategically?"#;
