//! Account page sections.
//!
//! No auth yet: the page renders a demo profile and an empty order history.

pub fn render_account() -> String {
    r##"<section class="account" data-section="account">
    <h1>My Account</h1>
    <nav class="account-tabs" aria-label="Account sections">
        <a href="#profile" class="tab active">Profile</a>
        <a href="#orders" class="tab">Orders</a>
    </nav>
    <div class="account-panel" id="profile">
        <h2>Profile Information</h2>
        <dl class="profile-fields">
            <dt>Name</dt>
            <dd>Guest Shopper</dd>
            <dt>Email</dt>
            <dd>guest@example.com</dd>
            <dt>Member since</dt>
            <dd>2026</dd>
        </dl>
    </div>
    <div class="account-panel" id="orders">
        <h2>Order History</h2>
        <p class="empty-note">No orders yet. <a href="/products">Start shopping</a>.</p>
    </div>
</section>"##
        .to_string()
}
