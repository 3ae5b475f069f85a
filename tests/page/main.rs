mod contact_form;
mod layout;
mod navigation;
