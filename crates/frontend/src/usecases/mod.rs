pub mod u501_bulk_upload_leads;
